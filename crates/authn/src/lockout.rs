//! Lockout state machine for a single user.
//!
//! Transitions mutate the entity in place and report what happened; they
//! perform no IO. Callers apply them inside the store's per-user
//! read-modify-write scope so two concurrent failures against one account
//! never observe the same pre-increment counter.

use acmepay_audit::AuditAction;
use acmepay_core::{DomainError, DomainResult};
use acmepay_identity::User;

/// The lock triggers on the 5th consecutive failure.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// What a failed authentication attempt did to the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureOutcome {
    /// Post-increment counter value.
    pub failed_attempts: u32,
    /// True when this attempt transitioned the account to Locked.
    pub locked_now: bool,
    /// Audit actions to emit, in occurrence order.
    pub audit: Vec<AuditAction>,
}

/// Record one failed authentication attempt.
///
/// The counter always increments by exactly 1. Below the threshold the
/// account stays Active. At the threshold a non-administrator transitions to
/// Locked with the `LOGIN_FAILED`, `BRUTE_FORCE`, `LOCK_USER` sequence;
/// administrators are exempt from lockout: their counter keeps increasing
/// but only `LOGIN_FAILED` is recorded.
pub fn on_auth_failure(user: &mut User) -> FailureOutcome {
    let pre = user.failed_attempts();
    let attempts = pre + 1;
    user.set_failed_attempts(attempts);

    if attempts < MAX_FAILED_ATTEMPTS || user.is_administrator() {
        return FailureOutcome {
            failed_attempts: attempts,
            locked_now: false,
            audit: vec![AuditAction::LoginFailed],
        };
    }

    user.lock();
    FailureOutcome {
        failed_attempts: attempts,
        locked_now: true,
        audit: vec![
            AuditAction::LoginFailed,
            AuditAction::BruteForce,
            AuditAction::LockUser,
        ],
    }
}

/// Record a successful authentication.
///
/// Resets the counter only when the account is Active and has prior
/// failures; a Locked account is left untouched (the guard never lets a
/// locked account reach this point). Returns whether a reset happened.
pub fn on_auth_success(user: &mut User) -> bool {
    if !user.is_locked() && user.failed_attempts() > 0 {
        user.set_failed_attempts(0);
        return true;
    }
    false
}

/// Administrator-initiated lock, independent of the failure counter.
pub fn explicit_lock(user: &mut User) -> DomainResult<()> {
    if user.is_administrator() {
        return Err(DomainError::AdminProtected);
    }
    user.lock();
    Ok(())
}

/// Administrator-initiated unlock: clears the lock and the counter,
/// unconditionally.
pub fn explicit_unlock(user: &mut User) {
    user.unlock();
}
