//! Email address value object.
//!
//! Emails are the natural identity key of the system: unique and compared
//! case-insensitively. The value is normalized to lowercase on construction
//! so equality, hashing and store lookups never have to re-normalize.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Corporate mail domain accepted at sign-up.
pub const CORPORATE_DOMAIN: &str = "@acme.com";

/// A validated, lowercase-normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize an address, enforcing the corporate domain.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::invalid_request("email must not be blank"));
        }

        let Some(local) = normalized.strip_suffix(CORPORATE_DOMAIN) else {
            return Err(DomainError::invalid_request(format!(
                "email must end with {CORPORATE_DOMAIN}"
            )));
        };

        if local.is_empty() || !local.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(DomainError::invalid_request("malformed email local part"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
