use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

pub const MISSING_TOKEN_FIELDS_MESSAGE: &str = "deviceId and roomName are required.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenRequest {
    pub device_id: Option<String>,
    pub room_name: Option<String>,
}

impl GetTokenRequest {
    /// Returns `(device_id, room_name)` when both are present and non-empty
    #[track_caller]
    pub fn validate(self) -> Result<(String, String), ApiError> {
        match (self.device_id, self.room_name) {
            (Some(device_id), Some(room_name)) if !device_id.is_empty() && !room_name.is_empty() => {
                Ok((device_id, room_name))
            }
            (device_id, _) => Err(ApiError::Validation {
                message: MISSING_TOKEN_FIELDS_MESSAGE.to_string(),
                field: Some(
                    if device_id.as_deref().is_none_or(str::is_empty) {
                        "deviceId"
                    } else {
                        "roomName"
                    }
                    .to_string(),
                ),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
