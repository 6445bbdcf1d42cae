//! Field rules for a registration request.
//!
//! Each validator checks one field and reports the first rule it breaks.
//! Lengths are counted in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane counts twice.

use crate::modules::users::core::email_address::{EmailAddress, EmailAddressError};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 5;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 20;
/// Minimum allowed length for a password.
pub const PASSWORD_MIN: usize = 8;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("username is required")]
    UsernameRequired,

    #[error("username must be between {min} and {max} characters long")]
    UsernameLength { min: usize, max: usize },

    #[error("username can only contain alphanumeric characters")]
    UsernameCharset,

    #[error("password is required")]
    PasswordRequired,

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("password must include at least one special character")]
    PasswordMissingSpecialCharacter,

    #[error("email is required")]
    EmailRequired,

    #[error("invalid email format")]
    EmailFormat(#[source] EmailAddressError),
}

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static SPECIAL_CHARACTER_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new("^[a-zA-Z0-9]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn special_character_regex() -> &'static Regex {
    SPECIAL_CHARACTER_RE.get_or_init(|| {
        Regex::new("[^a-zA-Z0-9]")
            .unwrap_or_else(|error| panic!("special character regex failed to compile: {error}"))
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn utf16_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_username(username: &str) -> Result<(), InvalidInput> {
    if is_blank(username) {
        return Err(InvalidInput::UsernameRequired);
    }
    let length = utf16_length(username);
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return Err(InvalidInput::UsernameLength {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
        });
    }
    if !username_regex().is_match(username) {
        return Err(InvalidInput::UsernameCharset);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), InvalidInput> {
    if is_blank(password) {
        return Err(InvalidInput::PasswordRequired);
    }
    if utf16_length(password) < PASSWORD_MIN {
        return Err(InvalidInput::PasswordTooShort { min: PASSWORD_MIN });
    }
    if !special_character_regex().is_match(password) {
        return Err(InvalidInput::PasswordMissingSpecialCharacter);
    }
    Ok(())
}

/// The email must be exactly one bare address: display names, angle
/// brackets and surrounding whitespace are rejected.
pub fn validate_email(email: &str) -> Result<(), InvalidInput> {
    if is_blank(email) {
        return Err(InvalidInput::EmailRequired);
    }
    EmailAddress::parse_exact(email).map_err(InvalidInput::EmailFormat)?;
    Ok(())
}
