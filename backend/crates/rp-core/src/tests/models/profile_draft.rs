use crate::{CoreError, ProfileDraft};

use serde_json::Number;

fn complete_draft() -> ProfileDraft {
    ProfileDraft {
        device_id: Some("d1".into()),
        name: Some("Ana".into()),
        age: Some(Number::from(7)),
        city: Some("Lima".into()),
        birthday: None,
        interests: Some(vec!["drawing".into()]),
    }
}

fn missing_field(draft: ProfileDraft) -> Option<String> {
    match draft.into_profile() {
        Err(CoreError::Validation { field, .. }) => field,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_complete_draft_becomes_profile() {
    let profile = complete_draft().into_profile().unwrap();

    assert_eq!(profile.device_id, "d1");
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.age, Number::from(7));
    assert_eq!(profile.city, "Lima");
    assert_eq!(profile.birthday, None);
    assert_eq!(profile.interests, Some(vec!["drawing".to_string()]));
}

#[test]
fn test_missing_device_id_is_rejected() {
    let draft = ProfileDraft {
        device_id: None,
        ..complete_draft()
    };

    assert_eq!(missing_field(draft), Some("deviceId".into()));
}

#[test]
fn test_empty_name_is_rejected() {
    let draft = ProfileDraft {
        name: Some(String::new()),
        ..complete_draft()
    };

    assert_eq!(missing_field(draft), Some("name".into()));
}

#[test]
fn test_zero_age_is_rejected() {
    let draft = ProfileDraft {
        age: Some(Number::from(0)),
        ..complete_draft()
    };

    assert_eq!(missing_field(draft), Some("age".into()));
}

#[test]
fn test_missing_city_is_rejected() {
    let draft = ProfileDraft {
        city: None,
        ..complete_draft()
    };

    assert_eq!(missing_field(draft), Some("city".into()));
}

#[test]
fn test_zero_float_age_is_rejected() {
    let draft = ProfileDraft {
        age: Number::from_f64(0.0),
        ..complete_draft()
    };

    assert_eq!(missing_field(draft), Some("age".into()));
}

#[test]
fn test_fractional_age_is_kept_as_sent() {
    let draft = ProfileDraft {
        age: Number::from_f64(7.5),
        ..complete_draft()
    };

    let profile = draft.into_profile().unwrap();

    assert_eq!(profile.age.as_f64(), Some(7.5));
}
