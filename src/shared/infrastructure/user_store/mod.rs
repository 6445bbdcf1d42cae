// Storage port for accepted registrations.
//
// Implementations own the records for the lifetime of the store. Records are
// never updated or removed.

pub mod in_memory;

use crate::modules::users::core::user::UserRecord;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("username already taken: {0}")]
    UsernameTaken(String),
}

pub trait UserStore: Send + Sync {
    /// Append `record` unless a username equal to it ignoring case is
    /// already stored. The check and the append happen atomically.
    fn insert_unique(&self, record: UserRecord) -> Result<(), UserStoreError>;

    fn contains_username(&self, username: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
