use crate::Result as AuthErrorResult;

use rp_core::VideoGrant;

use async_trait::async_trait;

/// Everything the signing primitive needs to mint one token
#[derive(Debug, Clone)]
pub struct AccessTokenRequest {
    pub identity: String,
    pub name: String,
    pub metadata: String,
    pub grant: VideoGrant,
}

/// Opaque credential-issuance primitive
#[async_trait]
pub trait TokenSigner: Send + Sync {
    /// Sign a token for the request
    async fn sign(&self, request: &AccessTokenRequest) -> AuthErrorResult<String>;
}
