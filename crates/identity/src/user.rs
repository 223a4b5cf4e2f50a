//! User entity: identity, credentials, lockout counters and the role relation.

use std::collections::BTreeSet;

use serde::Serialize;

use acmepay_core::{DomainResult, EmailAddress, UserId};

use crate::constraint;
use crate::password::PasswordHash;
use crate::role::{Role, RoleType};

/// A user account.
///
/// # Invariants
/// - `roles` is never empty after creation.
/// - `roles` never simultaneously contains an administrative-type and a
///   business-type role.
/// - `email` is unique (case-insensitive) across the store; normalization
///   happens in [`EmailAddress`].
///
/// The role set, lock flag and failure counter are private: every mutation
/// goes through a method that preserves the invariants above. Lockout
/// *decisions* live in the lockout state machine; this entity only applies
/// them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    password_hash: PasswordHash,
    locked: bool,
    failed_attempts: u32,
    roles: BTreeSet<Role>,
}

impl User {
    /// Create a fresh account: unlocked, zero failed attempts, exactly one
    /// initial role.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: EmailAddress,
        password_hash: PasswordHash,
        initial_role: Role,
    ) -> Self {
        Self {
            id: UserId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            password_hash,
            locked: false,
            failed_attempts: 0,
            roles: BTreeSet::from([initial_role]),
        }
    }

    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    pub fn is_administrator(&self) -> bool {
        self.roles.contains(&Role::Administrator)
    }

    pub fn has_role_of_type(&self, role_type: RoleType) -> bool {
        self.roles.iter().any(|r| r.role_type() == role_type)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Grant a role (set union, idempotent). Fails when the grant would mix
    /// administrative and business types.
    pub fn grant(&mut self, role: Role) -> DomainResult<()> {
        constraint::check_grant(&self.roles, role)?;
        self.roles.insert(role);
        Ok(())
    }

    /// Revoke a role. Fails when the role is not held, when the user is an
    /// administrator, or when the revoke would leave zero roles.
    pub fn revoke(&mut self, role: Role) -> DomainResult<()> {
        constraint::check_revoke(&self.roles, role)?;
        self.roles.remove(&role);
        Ok(())
    }

    pub fn set_password_hash(&mut self, hash: PasswordHash) {
        self.password_hash = hash;
    }

    /// Apply a decided failure-counter value (lockout machine output).
    pub fn set_failed_attempts(&mut self, attempts: u32) {
        self.failed_attempts = attempts;
    }

    /// Apply a decided lock transition.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlock and clear the failure counter.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.failed_attempts = 0;
    }
}

/// Outward-facing user shape.
///
/// The password hash is write-only and the lock/counter state is internal;
/// neither ever appears here. Roles are rendered in name order (the role
/// set is a `BTreeSet`, so iteration is already deterministic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    #[serde(rename = "name")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: EmailAddress,
    pub roles: Vec<&'static str>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            roles: user.roles.iter().map(Role::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use acmepay_core::DomainError;

    fn test_user(initial_role: Role) -> User {
        User::new(
            "John",
            "Doe",
            EmailAddress::parse("john@acme.com").unwrap(),
            PasswordHash::new("hash"),
            initial_role,
        )
    }

    #[test]
    fn new_user_has_exactly_one_role() {
        let user = test_user(Role::User);
        assert_eq!(user.roles().len(), 1);
        assert!(user.roles().contains(&Role::User));
        assert!(!user.is_locked());
        assert_eq!(user.failed_attempts(), 0);
    }

    #[test]
    fn grant_is_idempotent() {
        let mut user = test_user(Role::User);
        user.grant(Role::User).unwrap();
        assert_eq!(user.roles().len(), 1);
    }

    #[test]
    fn grant_mixing_types_fails() {
        let mut user = test_user(Role::Administrator);
        assert_eq!(
            user.grant(Role::Accountant),
            Err(DomainError::InvalidRoleCombination)
        );
        assert_eq!(user.roles().len(), 1);
    }

    #[test]
    fn revoke_last_role_fails() {
        let mut user = test_user(Role::User);
        assert_eq!(user.revoke(Role::User), Err(DomainError::MinimumRoleViolation));
        assert_eq!(user.roles().len(), 1);
    }

    #[test]
    fn unlock_resets_counter() {
        let mut user = test_user(Role::User);
        user.set_failed_attempts(4);
        user.lock();
        assert!(user.is_locked());

        user.unlock();
        assert!(!user.is_locked());
        assert_eq!(user.failed_attempts(), 0);
    }

    #[test]
    fn view_renders_roles_in_name_order_and_hides_secrets() {
        let mut user = test_user(Role::User);
        user.grant(Role::Accountant).unwrap();
        user.grant(Role::Auditor).unwrap();

        let view = UserView::from(&user);
        assert_eq!(view.roles, ["ACCOUNTANT", "AUDITOR", "USER"]);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("name").is_some());
        assert!(json.get("lastname").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("locked").is_none());
    }
}
