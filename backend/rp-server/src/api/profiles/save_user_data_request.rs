use rp_core::ProfileDraft;

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserDataRequest {
    pub device_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<Number>,
    pub city: Option<String>,
    pub birthday: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl From<SaveUserDataRequest> for ProfileDraft {
    fn from(r: SaveUserDataRequest) -> Self {
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
