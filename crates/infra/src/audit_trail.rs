//! In-memory append-only audit trail.

use std::sync::RwLock;

use acmepay_audit::{AuditEvent, AuditTrail};
use acmepay_core::{DomainError, DomainResult};

/// In-memory audit trail.
///
/// Intended for tests/dev. Insertion order is retrieval order; there is no
/// update and no delete.
#[derive(Debug, Default)]
pub struct InMemoryAuditTrail {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditTrail {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditTrail for InMemoryAuditTrail {
    fn append(&self, event: AuditEvent) -> DomainResult<()> {
        self.events
            .write()
            .map_err(|_| DomainError::storage("audit trail lock poisoned"))?
            .push(event);
        Ok(())
    }

    fn list_all(&self) -> DomainResult<Vec<AuditEvent>> {
        Ok(self
            .events
            .read()
            .map_err(|_| DomainError::storage("audit trail lock poisoned"))?
            .clone())
    }
}
