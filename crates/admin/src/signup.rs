//! Account sign-up.

use std::sync::Arc;

use tracing::info;

use acmepay_audit::{AuditEvent, AuditTrail};
use acmepay_core::{DomainError, DomainResult, EmailAddress};
use acmepay_identity::{CredentialHasher, IdentityStore, PasswordPolicy, Role, User, UserView};

use crate::context::ActorContext;

/// Raw sign-up payload, as the transport layer received it.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

pub struct SignupService {
    store: Arc<dyn IdentityStore>,
    hasher: Arc<dyn CredentialHasher>,
    trail: Arc<dyn AuditTrail>,
    policy: PasswordPolicy,
}

impl SignupService {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        hasher: Arc<dyn CredentialHasher>,
        trail: Arc<dyn AuditTrail>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            store,
            hasher,
            trail,
            policy,
        }
    }

    /// Register a new account.
    ///
    /// The very first user created overall becomes the ADMINISTRATOR; every
    /// later user starts as USER. Emits one `CREATE_USER` audit event on
    /// success.
    pub fn sign_up(&self, request: SignUpRequest, ctx: &ActorContext) -> DomainResult<UserView> {
        if request.name.trim().is_empty() || request.lastname.trim().is_empty() {
            return Err(DomainError::invalid_request("name and lastname are required"));
        }

        let email = EmailAddress::parse(&request.email)?;

        self.policy.check(&request.password)?;
        let hash = self.hasher.hash(&request.password);

        if self.store.exists_by_email(email.as_str())? {
            return Err(DomainError::UserExists);
        }

        let initial_role = if self.store.is_empty()? {
            Role::Administrator
        } else {
            Role::User
        };

        let user = User::new(
            request.name.trim(),
            request.lastname.trim(),
            email,
            hash,
            initial_role,
        );
        let view = UserView::from(&user);

        self.store.insert(user)?;
        self.trail.append(AuditEvent::user_created(
            ctx.subject(),
            view.email.as_str(),
            ctx.path(),
        ))?;

        info!(user = %view.email, role = ?view.roles, "user signed up");
        Ok(view)
    }
}
