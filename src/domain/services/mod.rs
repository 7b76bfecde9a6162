//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_detector;
mod layer_merger;
mod secret_provisioner;

pub use change_detector::{unchanged, value_unchanged, ComparisonError, MAX_COMPARE_DEPTH};
pub use layer_merger::{combine, merge_layers, merge_mappings, MergeError, MAX_MERGE_DEPTH};
pub use secret_provisioner::{
    Provisioning, SecretProvisioner, DEPLOY_PRIVATE_KEY, DEPLOY_PUBLIC_KEY, MASTER_PUBLIC_KEY,
    SECRETARY_URL,
};
