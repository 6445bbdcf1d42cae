//! Registration facade: one store, the register use case, and lookups over
//! the same store.

use crate::modules::users::core::user::RegistrationOutcome;
use crate::modules::users::use_cases::check_username::queries_port::RegisteredUserQueries;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decision::RegistrationError;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::shared::infrastructure::user_store::UserStore;
use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use std::sync::Arc;

pub struct UserRegistrationService<TStore = InMemoryUserStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
    register_handler: RegisterUserHandler<TStore>,
}

impl UserRegistrationService<InMemoryUserStore> {
    /// A service over a fresh, empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()))
    }
}

impl Default for UserRegistrationService<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TStore> UserRegistrationService<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn with_store(store: Arc<TStore>) -> Self {
        Self {
            register_handler: RegisterUserHandler::new(store.clone()),
            store,
        }
    }

    /// Validate the three fields in order (username, password, email), then
    /// check the username is not already taken and store the record.
    ///
    /// Fails with [`RegistrationError::InvalidInput`] for the first broken
    /// field rule, or [`RegistrationError::DuplicateUsername`] when the name
    /// matches a stored one ignoring case.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.register_handler
            .handle(RegisterUser::new(username, password, email))
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.store.is_registered(username)
    }

    pub fn registered_count(&self) -> usize {
        self.store.registered_count()
    }
}
