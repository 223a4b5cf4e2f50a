//! Development credential hasher.

use acmepay_identity::{CredentialHasher, CredentialVerifier, PasswordHash};

/// Marked plaintext "hashing" for tests/dev only.
///
/// Production deployments supply a real one-way implementation of the same
/// traits; nothing in the core depends on the algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct DevPasswordHasher;

const PREFIX: &str = "dev$";

impl CredentialHasher for DevPasswordHasher {
    fn hash(&self, plaintext: &str) -> PasswordHash {
        PasswordHash::new(format!("{PREFIX}{plaintext}"))
    }
}

impl CredentialVerifier for DevPasswordHasher {
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool {
        hash.expose()
            .strip_prefix(PREFIX)
            .is_some_and(|stored| stored == plaintext)
    }
}
