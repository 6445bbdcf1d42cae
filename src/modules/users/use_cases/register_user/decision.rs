use crate::modules::users::core::rules::InvalidInput;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("username already exists: {0}")]
    DuplicateUsername(String),
}

impl RegistrationError {
    /// Stable machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::DuplicateUsername(_) => "duplicate_username",
        }
    }
}
