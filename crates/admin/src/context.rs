//! Caller-supplied acting-principal context.

use acmepay_audit::ANONYMOUS_PRINCIPAL;

/// Who is performing an operation, and from which request path.
///
/// The transport layer builds this from its authentication state and passes
/// it into every call that produces an audit description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    principal: Option<String>,
    path: String,
}

impl ActorContext {
    pub fn authenticated(email: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            principal: Some(email.into().to_lowercase()),
            path: path.into(),
        }
    }

    pub fn anonymous(path: impl Into<String>) -> Self {
        Self {
            principal: None,
            path: path.into(),
        }
    }

    /// Audit subject: the principal's email, or the anonymous sentinel.
    pub fn subject(&self) -> &str {
        self.principal.as_deref().unwrap_or(ANONYMOUS_PRINCIPAL)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_subject_is_the_sentinel() {
        let ctx = ActorContext::anonymous("/auth/signup");
        assert_eq!(ctx.subject(), "Anonymous");
    }

    #[test]
    fn authenticated_subject_is_lowercased() {
        let ctx = ActorContext::authenticated("Admin@ACME.com", "/admin/user/role");
        assert_eq!(ctx.subject(), "admin@acme.com");
    }
}
