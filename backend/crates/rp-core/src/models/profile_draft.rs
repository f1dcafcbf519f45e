use crate::{CoreError, DeviceProfile, Result as CoreResult};

use serde_json::Number;

/// Unvalidated profile input as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub device_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<Number>,
    pub city: Option<String>,
    pub birthday: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl ProfileDraft {
    /// Promote the draft to a full profile.
    ///
    /// Empty strings and an age of zero count as missing. Any other number
    /// is accepted as sent.
    #[track_caller]
    pub fn into_profile(self) -> CoreResult<DeviceProfile> {
        let device_id = required_text("deviceId", self.device_id)?;
        let name = required_text("name", self.name)?;
        let age = match self.age {
            Some(age) if age.as_f64().is_some_and(|v| v != 0.0) => age,
            _ => return Err(CoreError::missing_field("age", "age is required")),
        };
        let city = required_text("city", self.city)?;

        Ok(DeviceProfile {
            device_id,
            name,
            age,
            city,
            birthday: self.birthday,
            interests: self.interests,
        })
    }
}

#[track_caller]
fn required_text(field: &str, value: Option<String>) -> CoreResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::missing_field(
            field,
            format!("{} is required", field),
        )),
    }
}
