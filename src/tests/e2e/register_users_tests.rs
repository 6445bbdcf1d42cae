use crate::modules::users::core::rules::InvalidInput;
use crate::modules::users::service::UserRegistrationService;
use crate::modules::users::use_cases::register_user::decision::RegistrationError;
use rstest::{fixture, rstest};

const PASSWORD: &str = "Passw0rd!";
const EMAIL: &str = "user@example.com";

#[fixture]
fn service() -> UserRegistrationService {
    UserRegistrationService::new()
}

#[rstest]
fn registers_then_rejects_the_same_username(service: UserRegistrationService) {
    let outcome = service
        .register("validUser1", "Passw0rd!", "user@example.com")
        .unwrap();
    assert_eq!(outcome.username, "validUser1");
    assert!(outcome.message.contains("successful"));
    assert!(service.is_registered("validUser1"));

    let duplicate = service.register("validUser1", "AnotherP@ss1", "other@example.com");
    assert_eq!(
        duplicate,
        Err(RegistrationError::DuplicateUsername("validUser1".to_string()))
    );
    assert_eq!(service.registered_count(), 1);
}

#[rstest]
fn treats_usernames_as_case_insensitive(service: UserRegistrationService) {
    service.register("Alice", PASSWORD, EMAIL).unwrap();
    let result = service.register("alice", PASSWORD, EMAIL);
    assert!(matches!(result, Err(RegistrationError::DuplicateUsername(_))));
    assert!(service.is_registered("ALICE"));
    assert!(service.is_registered("alıce"));
    assert!(!service.is_registered("alice "));
}

#[rstest]
#[case(4, false)]
#[case(5, true)]
#[case(20, true)]
#[case(21, false)]
fn enforces_username_length_bounds(
    service: UserRegistrationService,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let username = "a".repeat(length);
    let result = service.register(&username, PASSWORD, EMAIL);
    assert_eq!(result.is_ok(), accepted);
    if !accepted {
        assert_eq!(
            result,
            Err(RegistrationError::InvalidInput(InvalidInput::UsernameLength {
                min: 5,
                max: 20
            }))
        );
    }
    assert_eq!(service.is_registered(&username), accepted);
}

#[rstest]
#[case("Passw0!", false)]
#[case("Passw0r!", true)]
#[case("Passw0rd", false)]
fn enforces_password_rules(
    service: UserRegistrationService,
    #[case] password: &str,
    #[case] accepted: bool,
) {
    let result = service.register("validUser1", password, EMAIL);
    assert_eq!(result.is_ok(), accepted);
}

#[rstest]
#[case("user@example.com", true)]
#[case("useratexample.com", false)]
#[case("Some User <user@example.com>", false)]
#[case("user@example.com ", false)]
#[case("a@example.com,b@example.com", false)]
fn accepts_only_a_single_bare_email(
    service: UserRegistrationService,
    #[case] email: &str,
    #[case] accepted: bool,
) {
    let result = service.register("validUser1", PASSWORD, email);
    assert_eq!(result.is_ok(), accepted);
    if !accepted {
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidInput(InvalidInput::EmailFormat(_)))
        ));
    }
}

#[rstest]
fn never_grows_the_store_on_failure(service: UserRegistrationService) {
    service.register("validUser1", PASSWORD, EMAIL).unwrap();
    let failures = [
        ("", PASSWORD, EMAIL),
        ("validUser2", "short", EMAIL),
        ("validUser2", PASSWORD, ""),
        ("VALIDUSER1", PASSWORD, EMAIL),
    ];
    for (username, password, email) in failures {
        assert!(service.register(username, password, email).is_err());
        assert_eq!(service.registered_count(), 1);
    }
    assert!(!service.is_registered("validUser2"));
}

#[rstest]
fn looks_up_any_string_without_side_effects(service: UserRegistrationService) {
    assert!(!service.is_registered(""));
    assert!(!service.is_registered("not valid at all!"));
    assert_eq!(service.registered_count(), 0);
}

#[rstest]
fn registers_exactly_once_under_concurrent_attempts(service: UserRegistrationService) {
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["racer1", "Racer1", "RACER1", "rAcEr1"]
            .into_iter()
            .map(|username| {
                let service = &service;
                scope.spawn(move || service.register(username, PASSWORD, EMAIL))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().all(|result| matches!(
        result,
        Ok(_) | Err(RegistrationError::DuplicateUsername(_))
    )));
    assert_eq!(service.registered_count(), 1);
}
