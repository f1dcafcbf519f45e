pub mod device_profile;
pub mod identity_metadata;
pub mod profile_draft;
pub mod session_credential;
pub mod video_grant;
