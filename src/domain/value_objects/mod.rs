//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod comparable;
mod coordinates;
mod deploy_key;
mod envelope;
mod value;

pub use comparable::{ComparableValue, Equality, VolatileValue};
pub use coordinates::{MavenCoordinates, MissingCoordinate};
pub use deploy_key::{public_key_from_bytes, DeployKeyPair, KEY_LENGTH};
pub use envelope::{find_envelopes, SecretEnvelope};
pub use value::{lookup, Mapping, Value, ValueKind};
