//! `acmepay-admin`: coordinated account administration.
//!
//! Compound operations (grant/revoke/delete/lock/unlock, sign-up, password
//! change) composing the identity store with the constraint and lockout
//! engines, each call one atomic unit.

pub mod context;
pub mod coordinator;
pub mod password;
pub mod signup;

pub use context::ActorContext;
pub use coordinator::{AccessOperation, RoleOperation, RoleOperationCoordinator};
pub use password::PasswordService;
pub use signup::{SignUpRequest, SignupService};
