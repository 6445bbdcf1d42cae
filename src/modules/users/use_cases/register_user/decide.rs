// Pure decision function for registration.
//
// Runs the field rules in a fixed order and stops at the first failure.
// Uniqueness is not decided here: the store checks it under its own lock.

use crate::modules::users::core::rules::{validate_email, validate_password, validate_username};
use crate::modules::users::core::user::UserRecord;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decision::RegistrationError;

pub fn decide_register(command: RegisterUser) -> Result<UserRecord, RegistrationError> {
    validate_username(&command.username)?;
    validate_password(&command.password)?;
    validate_email(&command.email)?;
    Ok(UserRecord {
        username: command.username,
        password: command.password,
        email: command.email,
    })
}
