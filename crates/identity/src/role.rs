//! Closed role enumeration and its administrative/business typing.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use acmepay_core::DomainError;

/// A named permission tag.
///
/// The set of valid roles is fixed at four; roles are immutable reference
/// data and are never created or deleted at runtime. Variants are declared
/// in alphabetical order so the derived `Ord` matches ordering by name,
/// and sorted output (role sets in user views, audit descriptions) falls
/// out of `BTreeSet` iteration without a comparator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Accountant,
    Administrator,
    Auditor,
    User,
}

/// Role typing used by the mutual-exclusion invariant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    Administrative,
    Business,
}

impl Role {
    /// All roles, in name order. Seeded once at process start as reference data.
    pub const ALL: [Role; 4] = [
        Role::Accountant,
        Role::Administrator,
        Role::Auditor,
        Role::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Accountant => "ACCOUNTANT",
            Role::Administrator => "ADMINISTRATOR",
            Role::Auditor => "AUDITOR",
            Role::User => "USER",
        }
    }

    /// Derived once from the name: `ADMINISTRATOR` is administrative, every
    /// other recognized role is business.
    pub fn role_type(&self) -> RoleType {
        match self {
            Role::Administrator => RoleType::Administrative,
            _ => RoleType::Business,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Validate against the closed enumeration; unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCOUNTANT" => Ok(Role::Accountant),
            "ADMINISTRATOR" => Ok(Role::Administrator),
            "AUDITOR" => Ok(Role::Auditor),
            "USER" => Ok(Role::User),
            _ => Err(DomainError::RoleNotFound),
        }
    }
}
