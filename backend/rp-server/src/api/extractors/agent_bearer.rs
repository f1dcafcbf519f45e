//! Axum extractor for the agent-only routes

use crate::ApiError;

use rp_auth::{AuthGate, BearerToken};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Bearer value from the `Authorization` header.
///
/// Rejects with 403 when the header or its value is missing. The value
/// itself is not verified.
pub struct AgentBearer(pub BearerToken);

impl<S> FromRequestParts<S> for AgentBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        async move {
            let bearer = AuthGate::authorize(header.as_deref())?;
            Ok(AgentBearer(bearer))
        }
    }
}
