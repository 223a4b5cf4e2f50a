//! In-memory user store.

use std::collections::HashMap;
use std::sync::RwLock;

use acmepay_core::{DomainError, DomainResult};
use acmepay_identity::{IdentityStore, PasswordHash, User};

/// In-memory identity store keyed by lowercased email.
///
/// Intended for tests/dev. Not optimized for performance: one `RwLock`
/// guards the whole map, which trivially satisfies the per-user atomicity
/// contract: [`IdentityStore::update_with`] holds the write lock across
/// the closure, so no two read-modify-writes interleave.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl core::fmt::Debug) -> DomainError {
    DomainError::storage("identity store lock poisoned")
}

impl IdentityStore for InMemoryIdentityStore {
    fn insert(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        let key = user.email.as_str().to_string();
        if users.contains_key(&key) {
            return Err(DomainError::UserExists);
        }
        users.insert(key, user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.contains_key(&email.to_lowercase()))
    }

    fn is_empty(&self) -> DomainResult<bool> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.is_empty())
    }

    fn list_all(&self) -> DomainResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    fn delete(&self, email: &str) -> DomainResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        users
            .remove(&email.to_lowercase())
            .map(|_| ())
            .ok_or(DomainError::UserNotFound)
    }

    fn save_password(&self, email: &str, hash: PasswordHash) -> DomainResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = users
            .get_mut(&email.to_lowercase())
            .ok_or(DomainError::UserNotFound)?;
        user.set_password_hash(hash);
        Ok(())
    }

    fn update_with(&self, email: &str, apply: &mut dyn FnMut(&mut User)) -> DomainResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = users
            .get_mut(&email.to_lowercase())
            .ok_or(DomainError::UserNotFound)?;
        apply(user);
        Ok(())
    }
}
