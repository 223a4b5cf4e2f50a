//! Authentication entry point: lockout bookkeeping + opaque failures.

use std::sync::Arc;

use tracing::{debug, warn};

use acmepay_audit::{AuditAction, AuditEvent, AuditTrail};
use acmepay_core::{DomainError, DomainResult};
use acmepay_identity::{CredentialVerifier, IdentityStore, User};

use crate::lockout;

/// Invoked once per inbound request carrying basic-style credentials.
///
/// The guard is the sole caller of the lockout transitions. No matter why an
/// attempt fails, the caller always gets the same opaque
/// [`DomainError::Unauthorized`], while the audit trail records the precise
/// transition.
pub struct AuthenticationGuard {
    store: Arc<dyn IdentityStore>,
    verifier: Arc<dyn CredentialVerifier>,
    trail: Arc<dyn AuditTrail>,
}

impl AuthenticationGuard {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        verifier: Arc<dyn CredentialVerifier>,
        trail: Arc<dyn AuditTrail>,
    ) -> Self {
        Self {
            store,
            verifier,
            trail,
        }
    }

    /// Authenticate one attempt. Returns the authenticated user on success.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        path: &str,
    ) -> DomainResult<User> {
        let username = username.trim().to_lowercase();

        let Some(user) = self.store.find_by_email(&username)? else {
            self.trail.append(AuditEvent::login_failed(&username, path))?;
            debug!(username = %username, "authentication attempt for unknown user");
            return Err(DomainError::Unauthorized);
        };

        // A locked account hard-fails before the credential check: correct
        // credentials must not become an access path, and its counter stays
        // frozen until an explicit unlock.
        if user.is_locked() {
            debug!(username = %username, "authentication attempt against locked account");
            return Err(DomainError::Unauthorized);
        }

        if self.verifier.verify(password, user.password_hash()) {
            self.store
                .update_with(&username, &mut |u| {
                    lockout::on_auth_success(u);
                })?;
            let user = self
                .store
                .find_by_email(&username)?
                .ok_or(DomainError::Unauthorized)?;
            return Ok(user);
        }

        let mut outcome = None;
        self.store.update_with(&username, &mut |u| {
            outcome = Some(lockout::on_auth_failure(u));
        })?;
        let outcome = outcome.ok_or_else(|| DomainError::storage("update_with skipped closure"))?;

        for action in &outcome.audit {
            let event = match action {
                AuditAction::LoginFailed => AuditEvent::login_failed(&username, path),
                AuditAction::BruteForce => AuditEvent::brute_force(&username, path),
                AuditAction::LockUser => AuditEvent::lockout(&username, path),
                _ => continue,
            };
            self.trail.append(event)?;
        }

        if outcome.locked_now {
            warn!(
                username = %username,
                failed_attempts = outcome.failed_attempts,
                "brute-force threshold reached, account locked"
            );
        }

        Err(DomainError::Unauthorized)
    }
}
