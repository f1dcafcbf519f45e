use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Profile of the person behind a device, keyed by `device_id`.
///
/// Serialized with camelCase keys; optional fields are left out when unset.
/// `age` is kept as the JSON number the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub device_id: String,
    pub name: String,
    pub age: Number,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl DeviceProfile {
    pub fn new(device_id: String, name: String, age: impl Into<Number>, city: String) -> Self {
        Self {
            device_id,
            name,
            age: age.into(),
            city,
            birthday: None,
            interests: None,
        }
    }

    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = Some(interests.into_iter().map(Into::into).collect());
        self
    }
}
