//! Profile persistence handler

use crate::{AgentBearer, ApiError, ApiResult, AppState, SaveUserDataRequest, SaveUserDataResponse};

use rp_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use error_location::ErrorLocation;

pub const MISSING_USER_DATA_MESSAGE: &str = "Missing required user data.";

/// POST /save-user-data
pub async fn save_user_data(
    State(state): State<AppState>,
    _bearer: AgentBearer,
    payload: Result<Json<SaveUserDataRequest>, JsonRejection>,
) -> ApiResult<Json<SaveUserDataResponse>> {
    let Json(req) = payload?;

    let user = state
        .profile_writer
        .save(req.into())
        .await
        .map_err(|e| match e {
            ServiceError::Validation { field, .. } => ApiError::Validation {
                message: MISSING_USER_DATA_MESSAGE.to_string(),
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::from(other),
        })?;

    log::info!("Successfully saved user data for deviceId {}", user.device_id);

    Ok(Json(SaveUserDataResponse {
        success: true,
        user,
    }))
}
