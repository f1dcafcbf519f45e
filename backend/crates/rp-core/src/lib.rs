pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::device_profile::DeviceProfile;
pub use models::identity_metadata::IdentityMetadata;
pub use models::profile_draft::ProfileDraft;
pub use models::session_credential::{NEW_USER_DISPLAY_NAME, SessionCredential};
pub use models::video_grant::VideoGrant;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
