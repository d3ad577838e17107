//! Unit tests for user entity

use crate::domain::entities::user::User;
use crate::domain::value_objects::UserProfile;

fn sample_user() -> User {
    User::new(
        "a@x.io".to_string(),
        "$2b$04$abcdefghijklmnopqrstuuFakeHashValueForTestsOnly123456".to_string(),
        "A".to_string(),
        "1 Main St".to_string(),
    )
}

#[test]
fn test_new_user_creation() {
    let user = sample_user();

    assert_eq!(user.email, "a@x.io");
    assert_eq!(user.name, "A");
    assert_eq!(user.address, "1 Main St");
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_profile_has_no_password() {
    let user = sample_user();
    let profile = user.profile();
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["email"], "a@x.io");
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(UserProfile::from(user.clone()), profile);
}

#[test]
fn test_debug_redacts_hash() {
    let user = sample_user();
    let rendered = format!("{:?}", user);
    assert!(!rendered.contains(&user.password_hash));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_stored_shape() {
    let user = sample_user();
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["_id"], user.id.to_hex());
    assert_eq!(json["password"], user.password_hash);
    assert!(json.get("id").is_none());

    let back: User = serde_json::from_value(json).unwrap();
    assert_eq!(back, user);
}
