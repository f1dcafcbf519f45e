use crate::{DeviceProfile, IdentityMetadata};

use serde_json::json;

fn ana() -> DeviceProfile {
    DeviceProfile::new("d1".into(), "Ana".into(), 7, "Lima".into())
}

#[test]
fn test_new_user_serializes_device_id_and_flag_only() {
    let metadata = IdentityMetadata::new_user("new1");

    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(value, json!({ "deviceId": "new1", "isNewUser": true }));
}

#[test]
fn test_returning_user_serializes_profile_fields_and_flag() {
    let metadata = IdentityMetadata::ReturningUser(ana());

    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(
        value,
        json!({
            "deviceId": "d1",
            "name": "Ana",
            "age": 7,
            "city": "Lima",
            "isNewUser": false
        })
    );
}

#[test]
fn test_returning_user_includes_optional_fields_when_present() {
    let profile = ana()
        .with_birthday("2018-03-14")
        .with_interests(["dinosaurs", "space"]);
    let metadata = IdentityMetadata::ReturningUser(profile);

    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(value["birthday"], "2018-03-14");
    assert_eq!(value["interests"], json!(["dinosaurs", "space"]));
    assert_eq!(value["isNewUser"], false);
}

#[test]
fn test_deserialize_returning_user() {
    let raw = r#"{"deviceId":"d1","name":"Ana","age":7,"city":"Lima","isNewUser":false}"#;

    let metadata: IdentityMetadata = serde_json::from_str(raw).unwrap();

    assert_eq!(metadata, IdentityMetadata::ReturningUser(ana()));
}

#[test]
fn test_deserialize_new_user_ignores_profile_fields() {
    let raw = r#"{"deviceId":"new1","name":"ignored","isNewUser":true}"#;

    let metadata: IdentityMetadata = serde_json::from_str(raw).unwrap();

    assert_eq!(metadata, IdentityMetadata::new_user("new1"));
}

#[test]
fn test_deserialize_returning_user_without_name_fails() {
    let raw = r#"{"deviceId":"d1","age":7,"city":"Lima","isNewUser":false}"#;

    let result = serde_json::from_str::<IdentityMetadata>(raw);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("name"));
}

#[test]
fn test_deserialize_without_flag_fails() {
    let raw = r#"{"deviceId":"d1"}"#;

    assert!(serde_json::from_str::<IdentityMetadata>(raw).is_err());
}

#[test]
fn test_accessors() {
    let new_user = IdentityMetadata::new_user("new1");
    let returning = IdentityMetadata::ReturningUser(ana());

    assert!(new_user.is_new_user());
    assert_eq!(new_user.device_id(), "new1");
    assert_eq!(new_user.display_name(), None);

    assert!(!returning.is_new_user());
    assert_eq!(returning.device_id(), "d1");
    assert_eq!(returning.display_name(), Some("Ana"));
}
