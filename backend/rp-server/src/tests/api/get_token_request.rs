use crate::{ApiError, GetTokenRequest};

fn request(device_id: Option<&str>, room_name: Option<&str>) -> GetTokenRequest {
    GetTokenRequest {
        device_id: device_id.map(String::from),
        room_name: room_name.map(String::from),
    }
}

fn rejected_field(req: GetTokenRequest) -> Option<String> {
    match req.validate() {
        Err(ApiError::Validation { field, message, .. }) => {
            assert_eq!(message, "deviceId and roomName are required.");
            field
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_complete_request_validates() {
    let (device_id, room_name) = request(Some("d1"), Some("r1")).validate().unwrap();

    assert_eq!(device_id, "d1");
    assert_eq!(room_name, "r1");
}

#[test]
fn test_missing_room_is_rejected() {
    assert_eq!(rejected_field(request(Some("d1"), None)), Some("roomName".into()));
}

#[test]
fn test_empty_device_id_is_rejected() {
    assert_eq!(rejected_field(request(Some(""), Some("r1"))), Some("deviceId".into()));
}

#[test]
fn test_missing_both_reports_device_id() {
    assert_eq!(rejected_field(request(None, None)), Some("deviceId".into()));
}
