//! Security audit events.
//!
//! Events are:
//! - **immutable** (treat them as facts)
//! - created exactly once per security-relevant transition
//! - designed to be **append-only**

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject attributed to operations performed without an authenticated caller.
pub const ANONYMOUS_PRINCIPAL: &str = "Anonymous";

/// The closed vocabulary of security-relevant actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    CreateUser,
    ChangePassword,
    AccessDenied,
    LoginFailed,
    GrantRole,
    RemoveRole,
    LockUser,
    UnlockUser,
    DeleteUser,
    BruteForce,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CreateUser => "CREATE_USER",
            AuditAction::ChangePassword => "CHANGE_PASSWORD",
            AuditAction::AccessDenied => "ACCESS_DENIED",
            AuditAction::LoginFailed => "LOGIN_FAILED",
            AuditAction::GrantRole => "GRANT_ROLE",
            AuditAction::RemoveRole => "REMOVE_ROLE",
            AuditAction::LockUser => "LOCK_USER",
            AuditAction::UnlockUser => "UNLOCK_USER",
            AuditAction::DeleteUser => "DELETE_USER",
            AuditAction::BruteForce => "BRUTE_FORCE",
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of one security-relevant transition.
///
/// `subject` is the acting principal's email (or [`ANONYMOUS_PRINCIPAL`]);
/// `object` is the email/description acted upon; `path` is the originating
/// request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub subject: String,
    pub object: String,
    pub path: String,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        subject: impl Into<String>,
        object: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            subject: subject.into(),
            object: object.into(),
            path: path.into(),
        }
    }

    // Constructors below fix the description strings so every caller logs
    // the same shape for the same transition.

    pub fn user_created(actor: &str, email: &str, path: &str) -> Self {
        Self::new(AuditAction::CreateUser, actor, email, path)
    }

    pub fn password_changed(email: &str, path: &str) -> Self {
        Self::new(AuditAction::ChangePassword, email, email, path)
    }

    pub fn access_denied(actor: &str, path: &str) -> Self {
        Self::new(AuditAction::AccessDenied, actor, path, path)
    }

    pub fn login_failed(username: &str, path: &str) -> Self {
        Self::new(AuditAction::LoginFailed, username, path, path)
    }

    pub fn brute_force(username: &str, path: &str) -> Self {
        Self::new(AuditAction::BruteForce, username, path, path)
    }

    /// The lockout transition triggered by the brute-force threshold.
    pub fn lockout(username: &str, path: &str) -> Self {
        Self::new(
            AuditAction::LockUser,
            username,
            format!("Lock user {username}"),
            path,
        )
    }

    pub fn role_granted(actor: &str, role: &str, email: &str, path: &str) -> Self {
        Self::new(
            AuditAction::GrantRole,
            actor,
            format!("Grant role {role} to {email}"),
            path,
        )
    }

    pub fn role_removed(actor: &str, role: &str, email: &str, path: &str) -> Self {
        Self::new(
            AuditAction::RemoveRole,
            actor,
            format!("Remove role {role} from {email}"),
            path,
        )
    }

    pub fn user_locked(actor: &str, email: &str, path: &str) -> Self {
        Self::new(
            AuditAction::LockUser,
            actor,
            format!("Lock user {email}"),
            path,
        )
    }

    pub fn user_unlocked(actor: &str, email: &str, path: &str) -> Self {
        Self::new(
            AuditAction::UnlockUser,
            actor,
            format!("Unlock user {email}"),
            path,
        )
    }

    pub fn user_deleted(actor: &str, email: &str, path: &str) -> Self {
        Self::new(AuditAction::DeleteUser, actor, email, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_screaming_snake() {
        let json = serde_json::to_string(&AuditAction::LoginFailed).unwrap();
        assert_eq!(json, "\"LOGIN_FAILED\"");
        let json = serde_json::to_string(&AuditAction::BruteForce).unwrap();
        assert_eq!(json, "\"BRUTE_FORCE\"");
    }

    #[test]
    fn role_descriptions_match_the_fixed_shape() {
        let grant = AuditEvent::role_granted("admin@acme.com", "ACCOUNTANT", "bob@acme.com", "/admin/user/role");
        assert_eq!(grant.object, "Grant role ACCOUNTANT to bob@acme.com");

        let remove = AuditEvent::role_removed("admin@acme.com", "ACCOUNTANT", "bob@acme.com", "/admin/user/role");
        assert_eq!(remove.object, "Remove role ACCOUNTANT from bob@acme.com");
    }

    #[test]
    fn request_scoped_events_use_the_path_as_object() {
        let denied = AuditEvent::access_denied("bob@acme.com", "/admin/user/");
        assert_eq!(denied.object, "/admin/user/");
        assert_eq!(denied.path, "/admin/user/");

        let failed = AuditEvent::login_failed("ghost@acme.com", "/empl/payment");
        assert_eq!(failed.subject, "ghost@acme.com");
        assert_eq!(failed.object, "/empl/payment");
    }

    #[test]
    fn lock_descriptions_name_the_target() {
        let locked = AuditEvent::user_locked("admin@acme.com", "bob@acme.com", "/admin/user/access");
        assert_eq!(locked.object, "Lock user bob@acme.com");

        let unlocked = AuditEvent::user_unlocked("admin@acme.com", "bob@acme.com", "/admin/user/access");
        assert_eq!(unlocked.object, "Unlock user bob@acme.com");
    }
}
