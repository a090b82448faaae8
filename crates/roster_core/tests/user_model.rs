use roster_core::{validate_full_name, User, UserValidationError};

#[test]
fn new_user_trims_names_and_starts_unpersisted() {
    let user = User::new("  Ada ", " Lovelace  ");

    assert_eq!(user.id, None);
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert!(!user.is_persisted());
    assert_eq!(user.full_name(), "Ada Lovelace");
}

#[test]
fn validate_accepts_plain_names() {
    assert!(User::new("Ada", "Lovelace").validate().is_ok());
}

#[test]
fn validate_accepts_compound_and_unicode_names() {
    assert!(User::new("Jean-Luc", "O'Neill").validate().is_ok());
    assert!(User::new("José", "García Márquez").validate().is_ok());
    assert!(User::new("André", "Müller").validate().is_ok());
}

#[test]
fn validate_rejects_empty_names() {
    let err = User::new("", "Lovelace").validate().unwrap_err();
    assert_eq!(err, UserValidationError::EmptyFirstName);

    let err = User::new("Ada", "   ").validate().unwrap_err();
    assert_eq!(err, UserValidationError::EmptyLastName);
}

#[test]
fn validate_rejects_digits_and_symbols() {
    let err = User::new("Ada2", "Lovelace").validate().unwrap_err();
    assert_eq!(
        err,
        UserValidationError::MalformedFirstName("Ada2".to_string())
    );

    let err = User::new("Ada", "Love;lace").validate().unwrap_err();
    assert_eq!(
        err,
        UserValidationError::MalformedLastName("Love;lace".to_string())
    );
}

#[test]
fn validate_full_name_rejects_dangling_separators() {
    assert!(validate_full_name("Ada-").is_err());
    assert!(validate_full_name("'Ada").is_err());
    assert!(validate_full_name("Ada  Lovelace").is_err());
}

#[test]
fn validate_full_name_accepts_trimmed_input() {
    assert!(validate_full_name("  Ada  ").is_ok());
}

#[test]
fn user_serialization_uses_expected_wire_fields() {
    let user = User {
        id: Some(7),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["last_name"], "Lovelace");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}
