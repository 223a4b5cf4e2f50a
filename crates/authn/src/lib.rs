//! `acmepay-authn`: account-lockout state machine and authentication guard.

pub mod guard;
pub mod lockout;

pub use guard::AuthenticationGuard;
pub use lockout::{
    explicit_lock, explicit_unlock, on_auth_failure, on_auth_success, FailureOutcome,
    MAX_FAILED_ATTEMPTS,
};
