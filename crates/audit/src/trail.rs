//! Append-only audit trail contract.

use acmepay_core::DomainResult;

use crate::event::AuditEvent;

/// External collaborator owning audit storage.
///
/// The core only appends; there is no update, no delete, and no query
/// capability beyond full retrieval in insertion order.
pub trait AuditTrail: Send + Sync {
    fn append(&self, event: AuditEvent) -> DomainResult<()>;

    /// Every recorded event, oldest first.
    fn list_all(&self) -> DomainResult<Vec<AuditEvent>>;
}
