//! Deploy Key Pair
//!
//! Ephemeral NaCl box (X25519) key pair generated for a single deployment.
//! Never persisted, never reused.

use std::fmt;

use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};

/// Length in bytes of both halves of an X25519 key pair
pub const KEY_LENGTH: usize = 32;

pub struct DeployKeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl DeployKeyPair {
    /// Generate a fresh pair from a cryptographically secure source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = StaticSecret::random_from_rng(rng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    pub fn private_bytes(&self) -> [u8; KEY_LENGTH] {
        self.secret.to_bytes()
    }

    pub fn public_bytes(&self) -> [u8; KEY_LENGTH] {
        self.public.to_bytes()
    }
}

impl fmt::Debug for DeployKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployKeyPair")
            .field("secret", &"<redacted>")
            .field("public", &self.public.as_bytes())
            .finish()
    }
}

/// Interpret raw bytes as an X25519 public key
pub fn public_key_from_bytes(bytes: &[u8]) -> Option<PublicKey> {
    let array: [u8; KEY_LENGTH] = bytes.try_into().ok()?;
    Some(PublicKey::from(array))
}
