use crate::{ProfileStore, StoreResult};

use rp_core::DeviceProfile;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process store for tests and local runs without a database.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<RwLock<HashMap<String, DeviceProfile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_device_id(&self, device_id: &str) -> StoreResult<Option<DeviceProfile>> {
        Ok(self.profiles.read().await.get(device_id).cloned())
    }

    async fn upsert(&self, profile: &DeviceProfile) -> StoreResult<DeviceProfile> {
        self.profiles
            .write()
            .await
            .insert(profile.device_id.clone(), profile.clone());
        Ok(profile.clone())
    }
}
