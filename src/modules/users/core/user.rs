pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";

/// An accepted registration. Fields hold the inputs exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl UserRecord {
    /// Key used for case-insensitive username comparison.
    pub fn username_key(&self) -> String {
        username_key(&self.username)
    }
}

/// Uppercases each character on its own. Characters whose uppercase form is
/// longer than one character (such as 'ß') are kept as they are, so 'ı' and
/// 'i' both fold to 'I' but "straße" never equals "STRASSE".
pub fn username_key(username: &str) -> String {
    username.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub username: String,
    pub message: String,
}

impl RegistrationOutcome {
    pub fn accepted(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
        }
    }
}
