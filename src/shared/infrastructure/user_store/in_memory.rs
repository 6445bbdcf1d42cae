use crate::modules::users::core::user::{UserRecord, username_key};
use crate::shared::infrastructure::user_store::{UserStore, UserStoreError};
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Registrations {
    records: Vec<UserRecord>,
    usernames: HashSet<String>,
}

/// Ordered in-memory store with a case-folded username index.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Registrations>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No critical section below can panic halfway, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Registrations> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registrations> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for InMemoryUserStore {
    fn insert_unique(&self, record: UserRecord) -> Result<(), UserStoreError> {
        let key = record.username_key();
        let mut guard = self.write();
        if guard.usernames.contains(&key) {
            return Err(UserStoreError::UsernameTaken(record.username));
        }
        guard.records.push(record);
        guard.usernames.insert(key);
        Ok(())
    }

    fn contains_username(&self, username: &str) -> bool {
        self.read().usernames.contains(&username_key(username))
    }

    fn len(&self) -> usize {
        self.read().records.len()
    }
}
