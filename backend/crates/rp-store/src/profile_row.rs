use rp_core::DeviceProfile;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Row shape of the profile table.
///
/// Unset optional columns serialize as `null` so an upsert clears them.
/// Extra columns returned by the store are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub device_id: String,
    pub name: String,
    pub age: Number,
    pub city: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

impl From<&DeviceProfile> for ProfileRow {
    fn from(p: &DeviceProfile) -> Self {
        Self {
            device_id: p.device_id.clone(),
            name: p.name.clone(),
            age: p.age.clone(),
            city: p.city.clone(),
            birthday: p.birthday.clone(),
            interests: p.interests.clone(),
        }
    }
}

impl From<ProfileRow> for DeviceProfile {
    fn from(r: ProfileRow) -> Self {
        Self {
            device_id: r.device_id,
            name: r.name,
            age: r.age,
            city: r.city,
            birthday: r.birthday,
            interests: r.interests,
        }
    }
}
