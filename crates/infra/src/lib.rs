//! Infrastructure layer: store and trail adapters.
//!
//! The in-memory implementations are intended for tests/dev; a production
//! deployment supplies database-backed implementations of the same traits.

pub mod audit_trail;
pub mod hasher;
pub mod identity_store;


pub use audit_trail::InMemoryAuditTrail;
pub use hasher::DevPasswordHasher;
pub use identity_store::InMemoryIdentityStore;
