//! Domain Layer
//!
//! The core of lighter: merging, comparing and provisioning configuration
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Configuration layers and where they came from
//! - `value_objects/` - Value tree, volatile values, Maven coordinates, keys
//! - `services/` - Layer merger, change detector, secret provisioner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
