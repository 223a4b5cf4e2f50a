//! `acmepay-identity`: role/user data model and relational invariants.
//!
//! This crate is intentionally decoupled from HTTP and storage. It owns the
//! closed role enumeration, the user entity, the pure role-constraint engine
//! and the backing-store contract.

pub mod constraint;
pub mod password;
pub mod role;
pub mod store;
pub mod user;

pub use constraint::{check_grant, check_revoke};
pub use password::{CredentialHasher, CredentialVerifier, PasswordHash, PasswordPolicy};
pub use role::{Role, RoleType};
pub use store::IdentityStore;
pub use user::{User, UserView};
