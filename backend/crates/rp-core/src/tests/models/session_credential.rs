use crate::{IdentityMetadata, NEW_USER_DISPLAY_NAME, SessionCredential, VideoGrant};

#[test]
fn test_video_grant_for_room_grants_everything() {
    let grant = VideoGrant::for_room("r1");

    assert_eq!(grant.room, "r1");
    assert!(grant.room_join);
    assert!(grant.can_publish);
    assert!(grant.can_subscribe);
}

#[test]
fn test_video_grant_serializes_camel_case() {
    let value = serde_json::to_value(VideoGrant::for_room("r1")).unwrap();

    assert_eq!(value["roomJoin"], true);
    assert_eq!(value["canPublish"], true);
    assert_eq!(value["canSubscribe"], true);
}

#[test]
fn test_credential_metadata_decodes() {
    let metadata = IdentityMetadata::new_user("new1");
    let credential = SessionCredential {
        identity: "new1".into(),
        display_name: NEW_USER_DISPLAY_NAME.into(),
        metadata: metadata.to_json().unwrap(),
        room_name: "r1".into(),
        grant: VideoGrant::for_room("r1"),
        token: "signed".into(),
    };

    assert_eq!(credential.identity_metadata().unwrap(), metadata);
}
