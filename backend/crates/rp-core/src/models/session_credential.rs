use crate::{IdentityMetadata, VideoGrant};

use serde::Serialize;

/// Display name used when the device has no stored profile
pub const NEW_USER_DISPLAY_NAME: &str = "New Friend";

/// A signed credential for one device in one room. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredential {
    pub identity: String,
    pub display_name: String,
    /// Serialized [`IdentityMetadata`]
    pub metadata: String,
    pub room_name: String,
    pub grant: VideoGrant,
    #[serde(skip)]
    pub token: String,
}

impl SessionCredential {
    /// Decode the embedded metadata back into its typed form
    pub fn identity_metadata(&self) -> crate::Result<IdentityMetadata> {
        Ok(serde_json::from_str(&self.metadata)?)
    }
}
