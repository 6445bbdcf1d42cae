use crate::modules::users::core::user::RegistrationOutcome;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decide::decide_register;
use crate::modules::users::use_cases::register_user::decision::RegistrationError;
use crate::shared::infrastructure::user_store::{UserStore, UserStoreError};
use std::sync::Arc;

pub struct RegisterUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validate `command` and store it. The store is left untouched on any
    /// error.
    pub fn handle(&self, command: RegisterUser) -> Result<RegistrationOutcome, RegistrationError> {
        let record = decide_register(command).inspect_err(|error| {
            tracing::debug!(kind = error.kind(), reason = %error, "registration rejected");
        })?;
        let outcome = RegistrationOutcome::accepted(&record);

        self.store
            .insert_unique(record)
            .map_err(|UserStoreError::UsernameTaken(username)| {
                tracing::debug!(%username, "registration rejected: username taken");
                RegistrationError::DuplicateUsername(username)
            })?;

        tracing::info!(username = %outcome.username, "user registered");
        Ok(outcome)
    }
}
