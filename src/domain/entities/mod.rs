//! Domain Entities
//!
//! - `ConfigLayer` - One named source of configuration values

mod layer;

pub use layer::{ConfigLayer, LayerOrigin};
