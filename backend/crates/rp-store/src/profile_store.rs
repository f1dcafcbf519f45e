use crate::StoreResult;

use rp_core::DeviceProfile;

use async_trait::async_trait;

/// Keyed record store holding one profile per device.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Point lookup by device identifier. `Ok(None)` means no such profile.
    async fn find_by_device_id(&self, device_id: &str) -> StoreResult<Option<DeviceProfile>>;

    /// Create the profile, or fully replace the existing one with the same
    /// device identifier. Returns the record as persisted.
    async fn upsert(&self, profile: &DeviceProfile) -> StoreResult<DeviceProfile>;
}
