use crate::shared::infrastructure::user_store::UserStore;

/// Read side of the registration store.
pub trait RegisteredUserQueries {
    /// Any string is a valid lookup key, including ones registration would
    /// reject.
    fn is_registered(&self, username: &str) -> bool;

    fn registered_count(&self) -> usize;
}

impl<TStore> RegisteredUserQueries for TStore
where
    TStore: UserStore + ?Sized,
{
    fn is_registered(&self, username: &str) -> bool {
        self.contains_username(username)
    }

    fn registered_count(&self) -> usize {
        self.len()
    }
}
