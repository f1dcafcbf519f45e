//! Session token handler

use crate::{ApiResult, AppState, GetTokenRequest, TokenResponse};

use rp_service::{IdentityResolver, ServiceResult, TokenIssuer};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /get-token
pub async fn get_token(
    State(state): State<AppState>,
    payload: Result<Json<GetTokenRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;

    // 1. Validate before touching the store or the signer
    let (device_id, room_name) = req.validate()?;

    log::info!("Token request for deviceId: {}", device_id);

    // 2. Resolve identity and sign
    let token = issue_token(
        &state.identity_resolver,
        &state.token_issuer,
        &device_id,
        &room_name,
    )
    .await?;

    Ok(Json(TokenResponse { token }))
}

async fn issue_token(
    resolver: &IdentityResolver,
    issuer: &TokenIssuer,
    device_id: &str,
    room_name: &str,
) -> ServiceResult<String> {
    let metadata = resolver.resolve(device_id).await?;
    let credential = issuer
        .issue(device_id, metadata.display_name(), &metadata, room_name)
        .await?;
    Ok(credential.token)
}
