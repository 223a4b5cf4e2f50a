//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal for the single requested operation: the caller
/// either fully applied a transition or applied none of it. Kinds stay
/// distinguishable so the transport layer can map them to user-visible
/// messages; only the authentication guard collapses its failure reasons
/// into [`DomainError::Unauthorized`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No user exists for the given email.
    #[error("user not found")]
    UserNotFound,

    /// The role name is outside the fixed enumeration.
    #[error("role not found")]
    RoleNotFound,

    /// A revoke targeted a role the user does not hold.
    #[error("the user does not have the role")]
    RoleNotFoundForUser,

    /// The operation would lock, demote, delete or strip an administrator.
    #[error("operation not permitted on an administrator account")]
    AdminProtected,

    /// A revoke would leave the user with zero roles.
    #[error("the user must have at least one role")]
    MinimumRoleViolation,

    /// A grant would mix administrative and business role types.
    #[error("the user cannot combine administrative and business roles")]
    InvalidRoleCombination,

    /// An operation token outside its fixed enumeration.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Malformed or missing required fields.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A sign-up targeted an email that is already registered.
    #[error("user already exists")]
    UserExists,

    /// A password failed the minimum-length policy.
    #[error("password length must be {0} chars minimum")]
    InvalidPassword(usize),

    /// A password is present in the breached-password denylist.
    #[error("the password is in the hacker's database")]
    BreachedPassword,

    /// A password change submitted the currently active password.
    #[error("the passwords must be different")]
    EqualPassword,

    /// Opaque authentication failure (deliberately reason-free).
    #[error("unauthorized")]
    Unauthorized,

    /// Backing-store failure (lock poisoning, IO, ...).
    #[error("storage: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_operation(op: impl Into<String>) -> Self {
        Self::InvalidOperation(op.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
