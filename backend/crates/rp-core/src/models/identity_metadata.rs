use crate::{DeviceProfile, Result as CoreResult};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Identity payload embedded in a session credential.
///
/// On the wire both variants are flat JSON objects distinguished by the
/// `isNewUser` flag:
///
/// ```json
/// { "deviceId": "d1", "isNewUser": true }
/// { "deviceId": "d1", "name": "Ana", "age": 7, "city": "Lima", "isNewUser": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityMetadata {
    NewUser { device_id: String },
    ReturningUser(DeviceProfile),
}

impl IdentityMetadata {
    pub fn new_user(device_id: impl Into<String>) -> Self {
        Self::NewUser {
            device_id: device_id.into(),
        }
    }

    pub fn device_id(&self) -> &str {
        match self {
            Self::NewUser { device_id } => device_id,
            Self::ReturningUser(profile) => &profile.device_id,
        }
    }

    pub fn is_new_user(&self) -> bool {
        matches!(self, Self::NewUser { .. })
    }

    /// Stored profile name, if the device is known
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::NewUser { .. } => None,
            Self::ReturningUser(profile) => Some(&profile.name),
        }
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewUserWire<'a> {
    device_id: &'a str,
    is_new_user: bool,
}

#[derive(Serialize)]
struct ReturningUserWire<'a> {
    #[serde(flatten)]
    profile: &'a DeviceProfile,
    #[serde(rename = "isNewUser")]
    is_new_user: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataWire {
    device_id: String,
    is_new_user: bool,
    name: Option<String>,
    age: Option<Number>,
    city: Option<String>,
    birthday: Option<String>,
    interests: Option<Vec<String>>,
}

impl Serialize for IdentityMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::NewUser { device_id } => NewUserWire {
                device_id,
                is_new_user: true,
            }
            .serialize(serializer),
            Self::ReturningUser(profile) => ReturningUserWire {
                profile,
                is_new_user: false,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IdentityMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = MetadataWire::deserialize(deserializer)?;

        if wire.is_new_user {
            return Ok(Self::NewUser {
                device_id: wire.device_id,
            });
        }

        Ok(Self::ReturningUser(DeviceProfile {
            device_id: wire.device_id,
            name: wire.name.ok_or_else(|| D::Error::missing_field("name"))?,
            age: wire.age.ok_or_else(|| D::Error::missing_field("age"))?,
            city: wire.city.ok_or_else(|| D::Error::missing_field("city"))?,
            birthday: wire.birthday,
            interests: wire.interests,
        }))
    }
}
