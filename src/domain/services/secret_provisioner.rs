//! Secret Provisioner Domain Service
//!
//! Wires deploy-time encryption into an app definition: the secretary URL,
//! the environment's master public key, and a freshly generated deploy key
//! pair. The deploy key halves are wrapped as length-only volatile values so
//! that regenerating them on every run does not count as a config change.

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::domain::ports::{DecodeError, KeyEncoding};
use crate::domain::value_objects::{
    lookup, public_key_from_bytes, DeployKeyPair, Mapping, Value, VolatileValue, KEY_LENGTH,
};

pub const SECRETARY_URL: &str = "SECRETARY_URL";
pub const MASTER_PUBLIC_KEY: &str = "MASTER_PUBLIC_KEY";
pub const DEPLOY_PRIVATE_KEY: &str = "DEPLOY_PRIVATE_KEY";
pub const DEPLOY_PUBLIC_KEY: &str = "DEPLOY_PUBLIC_KEY";

/// Outcome of provisioning
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioning {
    /// The document does not ask for secret wiring; nothing was generated
    Skipped,
    /// A new config carrying the injected `env` entries
    Provisioned(Mapping),
}

impl Provisioning {
    /// The provisioned config, or the given fallback when skipped
    pub fn unwrap_or(self, fallback: Mapping) -> Mapping {
        match self {
            Provisioning::Skipped => fallback,
            Provisioning::Provisioned(config) => config,
        }
    }

    pub fn is_provisioned(&self) -> bool {
        matches!(self, Provisioning::Provisioned(_))
    }
}

/// Secret provisioner service
#[derive(Debug, Clone)]
pub struct SecretProvisioner<E: KeyEncoding> {
    encoding: E,
}

impl<E: KeyEncoding> SecretProvisioner<E> {
    pub fn new(encoding: E) -> Self {
        Self { encoding }
    }

    /// Provision `config` according to the `secretary` section of `document`
    ///
    /// Neither input is modified. Without a `secretary.url` this returns
    /// [`Provisioning::Skipped`] before touching `rng`. A master key that
    /// cannot be decoded aborts with no partial result.
    pub fn provision<R: RngCore + CryptoRng>(
        &self,
        document: &Mapping,
        config: &Mapping,
        rng: &mut R,
    ) -> Result<Provisioning, DecodeError> {
        let url = match lookup(document, &["secretary", "url"]).map(Value::raw) {
            Some(Value::String(url)) if !url.is_empty() => url.clone(),
            _ => {
                debug!("No secretary.url configured, skipping deploy key generation");
                return Ok(Provisioning::Skipped);
            }
        };

        let master_key = self.decode_master_key(document)?;

        let mut env = match config.get("env") {
            Some(Value::Mapping(env)) => env.clone(),
            Some(other) => {
                warn!("Replacing non-mapping env block ({}) to inject secrets", other.kind());
                Mapping::new()
            }
            None => Mapping::new(),
        };

        env.insert(SECRETARY_URL.to_string(), Value::String(url));
        env.insert(
            MASTER_PUBLIC_KEY.to_string(),
            Value::String(self.encoding.encode(&master_key)),
        );

        let deploy_key = DeployKeyPair::generate(rng);
        env.insert(
            DEPLOY_PRIVATE_KEY.to_string(),
            Value::Volatile(VolatileValue::length_only(
                self.encoding.encode(&deploy_key.private_bytes()),
            )),
        );
        env.insert(
            DEPLOY_PUBLIC_KEY.to_string(),
            Value::Volatile(VolatileValue::length_only(
                self.encoding.encode(&deploy_key.public_bytes()),
            )),
        );

        let mut provisioned = config.clone();
        provisioned.insert("env".to_string(), Value::Mapping(env));
        Ok(Provisioning::Provisioned(provisioned))
    }

    fn decode_master_key(&self, document: &Mapping) -> Result<[u8; KEY_LENGTH], DecodeError> {
        let encoded = lookup(document, &["secretary", "master", "publickey"])
            .and_then(Value::as_str)
            .filter(|key| !key.trim().is_empty())
            .ok_or(DecodeError::MissingMasterKey)?;

        let raw = self.encoding.decode(encoded.trim())?;
        let key = public_key_from_bytes(&raw).ok_or(DecodeError::InvalidKeyLength {
            length: raw.len(),
            expected: KEY_LENGTH,
        })?;
        Ok(key.to_bytes())
    }
}
