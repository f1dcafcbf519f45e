use rp_core::VideoGrant;

use serde::{Deserialize, Serialize};

/// Claims of a room access token, in the layout the media server expects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Issuer (API key)
    pub iss: String,
    /// Subject (participant identity)
    pub sub: String,
    /// Participant display name
    pub name: String,
    /// Opaque participant metadata
    pub metadata: String,
    /// Room capabilities
    pub video: VideoGrant,
    /// Not before (Unix)
    pub nbf: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Token id
    pub jti: String,
}
