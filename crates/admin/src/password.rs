//! Authenticated password change.

use std::sync::Arc;

use tracing::info;

use acmepay_audit::{AuditEvent, AuditTrail};
use acmepay_core::{DomainError, DomainResult};
use acmepay_identity::{CredentialHasher, CredentialVerifier, IdentityStore, PasswordPolicy};

pub struct PasswordService {
    store: Arc<dyn IdentityStore>,
    hasher: Arc<dyn CredentialHasher>,
    verifier: Arc<dyn CredentialVerifier>,
    trail: Arc<dyn AuditTrail>,
    policy: PasswordPolicy,
}

impl PasswordService {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        hasher: Arc<dyn CredentialHasher>,
        verifier: Arc<dyn CredentialVerifier>,
        trail: Arc<dyn AuditTrail>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            store,
            hasher,
            verifier,
            trail,
            policy,
        }
    }

    /// Replace the caller's own password.
    ///
    /// `email` is the authenticated caller (the transport layer guarantees
    /// this). The new password must pass the policy and must differ from the
    /// currently active one. Emits one `CHANGE_PASSWORD` audit event on
    /// success, with the caller as both subject and object.
    pub fn change_password(
        &self,
        email: &str,
        new_password: &str,
        path: &str,
    ) -> DomainResult<()> {
        self.policy.check(new_password)?;

        let email = email.trim().to_lowercase();
        let user = self
            .store
            .find_by_email(&email)?
            .ok_or(DomainError::UserNotFound)?;

        if self.verifier.verify(new_password, user.password_hash()) {
            return Err(DomainError::EqualPassword);
        }

        let hash = self.hasher.hash(new_password);
        self.store.save_password(&email, hash)?;
        self.trail.append(AuditEvent::password_changed(&email, path))?;

        info!(user = %email, "password changed");
        Ok(())
    }
}
