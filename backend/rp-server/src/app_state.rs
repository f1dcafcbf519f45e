use rp_auth::TokenSigner;
use rp_service::{IdentityResolver, ProfileWriter, TokenIssuer};
use rp_store::ProfileStore;

use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub identity_resolver: Arc<IdentityResolver>,
    pub token_issuer: Arc<TokenIssuer>,
    pub profile_writer: Arc<ProfileWriter>,
}

impl AppState {
    /// Wire the services around a profile store and a token signer
    pub fn new(store: Arc<dyn ProfileStore>, signer: Arc<dyn TokenSigner>) -> Self {
        Self {
            identity_resolver: Arc::new(IdentityResolver::new(store.clone())),
            token_issuer: Arc::new(TokenIssuer::new(signer)),
            profile_writer: Arc::new(ProfileWriter::new(store)),
        }
    }
}
