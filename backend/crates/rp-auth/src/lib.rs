pub mod auth_gate;
pub mod claims;
pub mod error;
pub mod livekit_token_signer;
pub mod token_signer;

pub use auth_gate::{AuthGate, BearerToken};
pub use claims::AccessTokenClaims;
pub use error::{AuthError, Result};
pub use livekit_token_signer::LiveKitTokenSigner;
pub use token_signer::{AccessTokenRequest, TokenSigner};
