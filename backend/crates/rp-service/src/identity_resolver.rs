use crate::{ServiceError, ServiceResult};

use rp_core::IdentityMetadata;
use rp_store::ProfileStore;

use std::sync::Arc;

use log::{info, warn};

/// Decides whether a device belongs to a known profile
pub struct IdentityResolver {
    store: Arc<dyn ProfileStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Resolve a device to its identity metadata.
    ///
    /// A failed lookup is reported as a new user, same as a missing profile.
    pub async fn resolve(&self, device_id: &str) -> ServiceResult<IdentityMetadata> {
        if device_id.is_empty() {
            return Err(ServiceError::validation("deviceId", "deviceId is required"));
        }

        match self.store.find_by_device_id(device_id).await {
            Ok(Some(profile)) => {
                info!("Returning user found for deviceId {}: {}", device_id, profile.name);
                Ok(IdentityMetadata::ReturningUser(profile))
            }
            Ok(None) => {
                info!("New user detected for deviceId: {}", device_id);
                Ok(IdentityMetadata::new_user(device_id))
            }
            Err(e) => {
                warn!(
                    "Profile lookup failed for deviceId {}, treating as new user: {}",
                    device_id, e
                );
                Ok(IdentityMetadata::new_user(device_id))
            }
        }
    }
}
