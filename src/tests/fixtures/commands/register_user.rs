// Shared test fixture for the RegisterUser command, seeded from
// `json/register_user.json`.

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use serde::Deserialize;
use std::fs;

const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/commands/json/register_user.json"
);

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub struct RegisterUserBuilder {
    inner: RegisterUser,
}

impl Default for RegisterUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterUserBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
        let dto: RegisterUserDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterUser::new(dto.username, dto.password, dto.email),
        }
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> RegisterUser {
        self.inner
    }
}

#[cfg(test)]
mod register_user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterUserBuilder::default().build();
        assert_eq!(built.username, "validUser1");
        assert_eq!(built.password, "Passw0rd!");
        assert_eq!(built.email, "user@example.com");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterUserBuilder::new()
            .username("otherUser")
            .password("An0ther!pass")
            .email("other@example.com")
            .build();

        assert_eq!(custom.username, "otherUser");
        assert_eq!(custom.password, "An0ther!pass");
        assert_eq!(custom.email, "other@example.com");
    }
}
