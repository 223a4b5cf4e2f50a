//! Role, access and lifecycle operations on user accounts.
//!
//! Every method is one logical unit: validate against the current state,
//! then apply and persist, or apply nothing at all. The coordinator itself
//! writes no audit records: it returns typed success/failure and the
//! transport caller logs through the `acmepay-audit` constructors, so audit
//! descriptions stay uniform across entry points.

use core::str::FromStr;
use std::sync::Arc;

use tracing::info;

use acmepay_authn::lockout;
use acmepay_core::{DomainError, DomainResult};
use acmepay_identity::{IdentityStore, Role, User, UserView};

/// Role-management operation tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoleOperation {
    Grant,
    Remove,
}

impl FromStr for RoleOperation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRANT" => Ok(RoleOperation::Grant),
            "REMOVE" => Ok(RoleOperation::Remove),
            other => Err(DomainError::invalid_operation(other)),
        }
    }
}

/// Access-toggle operation tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessOperation {
    Lock,
    Unlock,
}

impl FromStr for AccessOperation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCK" => Ok(AccessOperation::Lock),
            "UNLOCK" => Ok(AccessOperation::Unlock),
            other => Err(DomainError::invalid_operation(other)),
        }
    }
}

pub struct RoleOperationCoordinator {
    store: Arc<dyn IdentityStore>,
}

impl RoleOperationCoordinator {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    fn require_user(&self, email: &str) -> DomainResult<User> {
        self.store
            .find_by_email(email)?
            .ok_or(DomainError::UserNotFound)
    }

    /// Validate and mutate the role set inside the per-user write scope.
    /// Two concurrent mutations on the same account never validate against
    /// the same snapshot, and the mutated relation persists atomically with
    /// the record.
    fn mutate_roles(
        &self,
        email: &str,
        role_name: &str,
        apply: &dyn Fn(&mut User, Role) -> DomainResult<()>,
    ) -> DomainResult<(User, Role)> {
        let user = self.require_user(email)?;
        let role = Role::from_str(role_name)?;

        let mut result = Ok(());
        let mut mutated = None;
        self.store.update_with(user.email.as_str(), &mut |u| {
            result = apply(u, role);
            if result.is_ok() {
                mutated = Some(u.clone());
            }
        })?;
        result?;

        let mutated =
            mutated.ok_or_else(|| DomainError::storage("role mutation skipped closure"))?;
        Ok((mutated, role))
    }

    /// Grant `role_name` to the user behind `email`.
    ///
    /// Checked in order: user exists, role name is one of the fixed four,
    /// the grant does not mix role types.
    pub fn grant_role(&self, email: &str, role_name: &str) -> DomainResult<UserView> {
        let (user, role) = self.mutate_roles(email, role_name, &|u, role| u.grant(role))?;

        info!(user = %user.email, role = %role, "role granted");
        Ok(UserView::from(&user))
    }

    /// Revoke `role_name` from the user behind `email`.
    pub fn revoke_role(&self, email: &str, role_name: &str) -> DomainResult<UserView> {
        let (user, role) = self.mutate_roles(email, role_name, &|u, role| u.revoke(role))?;

        info!(user = %user.email, role = %role, "role revoked");
        Ok(UserView::from(&user))
    }

    /// Dispatch a role-management request with a raw operation token.
    pub fn manage_roles(
        &self,
        email: &str,
        role_name: &str,
        operation: &str,
    ) -> DomainResult<UserView> {
        self.require_user(email)?;
        Role::from_str(role_name)?;

        match RoleOperation::from_str(operation)? {
            RoleOperation::Grant => self.grant_role(email, role_name),
            RoleOperation::Remove => self.revoke_role(email, role_name),
        }
    }

    /// Delete the account behind `email`. Administrators can never be
    /// deleted; the role relation cascades away with the record.
    pub fn delete_user(&self, email: &str) -> DomainResult<()> {
        if email.trim().is_empty() {
            return Err(DomainError::invalid_request("email must not be blank"));
        }

        let user = self.require_user(email)?;
        if user.is_administrator() {
            return Err(DomainError::AdminProtected);
        }

        self.store.delete(user.email.as_str())?;
        info!(user = %user.email, "user deleted");
        Ok(())
    }

    /// Explicitly lock or unlock an account.
    pub fn toggle_access(&self, email: &str, operation: &str) -> DomainResult<()> {
        let user = self.require_user(email)?;
        if user.is_administrator() {
            return Err(DomainError::AdminProtected);
        }

        let operation = AccessOperation::from_str(operation)?;

        // The administrator check runs again inside the per-user write scope;
        // a concurrent ADMINISTRATOR grant cannot slip through between the
        // lookup above and the transition below.
        let mut result = Ok(());
        self.store.update_with(user.email.as_str(), &mut |u| {
            result = match operation {
                AccessOperation::Lock => lockout::explicit_lock(u),
                AccessOperation::Unlock => {
                    lockout::explicit_unlock(u);
                    Ok(())
                }
            };
        })?;
        result?;

        info!(user = %user.email, ?operation, "access toggled");
        Ok(())
    }

    /// All users, ordered by id, in the outward shape.
    pub fn list_users(&self) -> DomainResult<Vec<UserView>> {
        Ok(self
            .store
            .list_all()?
            .iter()
            .map(UserView::from)
            .collect())
    }
}
