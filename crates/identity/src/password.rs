//! Password policy and the opaque hash-and-verify capability.
//!
//! The hashing algorithm itself is an external collaborator: this crate only
//! fixes the contract (one-way hash, verify, never reversible) and the
//! policy applied to plaintext before hashing.

use std::collections::HashSet;

use acmepay_core::{DomainError, DomainResult};

/// An opaque, write-only password hash.
///
/// Never serialized outward; `Debug` redacts the value so hashes cannot leak
/// through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The stored representation, for verifiers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// One-way hashing capability, supplied externally.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> PasswordHash;
}

/// Match/no-match verification against a stored hash.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool;
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Process-wide immutable password policy, injected at startup.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    denylist: HashSet<String>,
}

impl PasswordPolicy {
    pub fn new(min_length: usize, denylist: impl IntoIterator<Item = String>) -> Self {
        Self {
            min_length,
            denylist: denylist.into_iter().collect(),
        }
    }

    /// Check a candidate plaintext against length and denylist rules.
    pub fn check(&self, plaintext: &str) -> DomainResult<()> {
        if plaintext.len() < self.min_length {
            return Err(DomainError::InvalidPassword(self.min_length));
        }
        if self.denylist.contains(plaintext) {
            return Err(DomainError::BreachedPassword);
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    /// The stock policy: 12-char minimum plus the known breached set.
    fn default() -> Self {
        const BREACHED: [&str; 12] = [
            "PasswordForJanuary",
            "PasswordForFebruary",
            "PasswordForMarch",
            "PasswordForApril",
            "PasswordForMay",
            "PasswordForJune",
            "PasswordForJuly",
            "PasswordForAugust",
            "PasswordForSeptember",
            "PasswordForOctober",
            "PasswordForNovember",
            "PasswordForDecember",
        ];
        Self::new(
            MIN_PASSWORD_LENGTH,
            BREACHED.iter().map(|p| (*p).to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_rejected() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.check("short"),
            Err(DomainError::InvalidPassword(MIN_PASSWORD_LENGTH))
        );
    }

    #[test]
    fn breached_password_rejected_even_when_long_enough() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.check("PasswordForOctober"),
            Err(DomainError::BreachedPassword)
        );
    }

    #[test]
    fn strong_password_accepted() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("correct-horse-battery").is_ok());
    }

    #[test]
    fn debug_redacts_hash() {
        let hash = PasswordHash::new("$2a$13$abcdef");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
    }
}
