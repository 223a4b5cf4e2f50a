//! `acmepay-audit`: security event model and the append-only trail contract.

pub mod event;
pub mod trail;

pub use event::{AuditAction, AuditEvent, ANONYMOUS_PRINCIPAL};
pub use trail::AuditTrail;
