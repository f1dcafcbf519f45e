use crate::{ServiceError, ServiceResult};

use rp_auth::{AccessTokenRequest, TokenSigner};
use rp_core::{IdentityMetadata, NEW_USER_DISPLAY_NAME, SessionCredential, VideoGrant};

use std::sync::Arc;

use log::info;

/// Builds and signs session credentials
pub struct TokenIssuer {
    signer: Arc<dyn TokenSigner>,
}

impl TokenIssuer {
    pub fn new(signer: Arc<dyn TokenSigner>) -> Self {
        Self { signer }
    }

    /// Issue a credential for `device_id` in `room_name`.
    ///
    /// `display_name` falls back to [`NEW_USER_DISPLAY_NAME`]. The grant is
    /// the same for every caller.
    pub async fn issue(
        &self,
        device_id: &str,
        display_name: Option<&str>,
        metadata: &IdentityMetadata,
        room_name: &str,
    ) -> ServiceResult<SessionCredential> {
        if device_id.is_empty() {
            return Err(ServiceError::validation("deviceId", "deviceId is required"));
        }
        if room_name.is_empty() {
            return Err(ServiceError::validation("roomName", "roomName is required"));
        }

        let display_name = display_name
            .filter(|n| !n.is_empty())
            .unwrap_or(NEW_USER_DISPLAY_NAME)
            .to_string();

        let request = AccessTokenRequest {
            identity: device_id.to_string(),
            name: display_name,
            metadata: metadata.to_json()?,
            grant: VideoGrant::for_room(room_name),
        };

        let token = self.signer.sign(&request).await?;

        info!(
            "Issued token for deviceId {} in room {} (new user: {})",
            device_id,
            room_name,
            metadata.is_new_user()
        );

        Ok(SessionCredential {
            identity: request.identity,
            display_name: request.name,
            metadata: request.metadata,
            room_name: room_name.to_string(),
            grant: request.grant,
            token,
        })
    }
}
