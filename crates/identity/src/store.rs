//! Backing-store contract for user records.

use acmepay_core::DomainResult;

use crate::password::PasswordHash;
use crate::user::User;

/// Keyed access to user records.
///
/// Lookups are by case-insensitive email (the natural identity key);
/// implementations normalize to lowercase.
///
/// # Atomicity
///
/// [`IdentityStore::update_with`] must serialize the read-modify-write per
/// user: two concurrent updates against the same account must not observe
/// the same pre-update state (no lost counter increments, no lost role
/// grants). Role mutation validates and applies inside this scope, and the
/// mutated record persists with it. Cross-user operations carry no ordering
/// requirement.
pub trait IdentityStore: Send + Sync {
    /// Insert a new record. Fails with `UserExists` when the email is taken.
    fn insert(&self, user: User) -> DomainResult<()>;

    fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// True when no user has ever been created (first-user check at sign-up).
    fn is_empty(&self) -> DomainResult<bool>;

    /// All users, ordered by id.
    fn list_all(&self) -> DomainResult<Vec<User>>;

    /// Remove the record entirely; the role relation cascades away with it.
    /// Fails with `UserNotFound` when absent.
    fn delete(&self, email: &str) -> DomainResult<()>;

    /// Persist a new password hash. Fails with `UserNotFound` when absent.
    fn save_password(&self, email: &str, hash: PasswordHash) -> DomainResult<()>;

    /// Atomically read-modify-write one user record. Fails with
    /// `UserNotFound` when absent.
    fn update_with(&self, email: &str, apply: &mut dyn FnMut(&mut User)) -> DomainResult<()>;
}
