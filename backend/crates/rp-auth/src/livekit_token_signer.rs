use crate::{AccessTokenClaims, AccessTokenRequest, AuthError, Result as AuthErrorResult, TokenSigner};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs LiveKit-style access tokens with HS256
pub struct LiveKitTokenSigner {
    api_key: Option<String>,
    api_secret: Option<String>,
    ttl: Duration,
}

impl LiveKitTokenSigner {
    /// Credentials may be absent; signing then fails per request.
    pub fn new(api_key: Option<String>, api_secret: Option<String>, ttl: Duration) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            api_secret: api_secret.filter(|s| !s.is_empty()),
            ttl,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    #[track_caller]
    fn credentials(&self) -> AuthErrorResult<(&str, &str)> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) => Ok((key, secret)),
            _ => Err(AuthError::MissingSigningKey {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[async_trait]
impl TokenSigner for LiveKitTokenSigner {
    async fn sign(&self, request: &AccessTokenRequest) -> AuthErrorResult<String> {
        let (api_key, api_secret) = self.credentials()?;

        let now = chrono::Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: api_key.to_string(),
            sub: request.identity.clone(),
            name: request.name.clone(),
            metadata: request.metadata.clone(),
            video: request.grant.clone(),
            nbf: now,
            exp: now + self.ttl.as_secs() as i64,
            jti: request.identity.clone(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(api_secret.as_bytes()),
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
