use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

/// Bearer value taken from an `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Presence-only gate for write routes.
///
/// Accepts any `"<scheme> <value>"` header with a non-empty value. The value
/// is not verified.
pub struct AuthGate;

impl AuthGate {
    #[track_caller]
    pub fn authorize(header: Option<&str>) -> AuthErrorResult<BearerToken> {
        let value = header
            .and_then(|h| h.split(' ').nth(1))
            .filter(|v| !v.is_empty());

        match value {
            Some(v) => Ok(BearerToken(v.to_string())),
            None => {
                warn!("Unauthorized attempt to access agent route");
                Err(AuthError::Forbidden {
                    message: "Invalid auth token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
