use rp_core::DeviceProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveUserDataResponse {
    pub success: bool,
    pub user: DeviceProfile,
}
