use crate::ServiceResult;

use rp_core::{DeviceProfile, ProfileDraft};
use rp_store::ProfileStore;

use std::sync::Arc;

use log::info;

/// Validates and persists device profiles
pub struct ProfileWriter {
    store: Arc<dyn ProfileStore>,
}

impl ProfileWriter {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Create or fully replace the profile described by `draft`.
    ///
    /// Nothing reaches the store unless every required field is present.
    pub async fn save(&self, draft: ProfileDraft) -> ServiceResult<DeviceProfile> {
        let profile = draft.into_profile()?;

        info!(
            "Saving data for deviceId {}: name={}, age={}, city={}",
            profile.device_id, profile.name, profile.age, profile.city
        );

        let saved = self.store.upsert(&profile).await?;

        info!("Saved profile for deviceId {}", saved.device_id);
        Ok(saved)
    }
}
