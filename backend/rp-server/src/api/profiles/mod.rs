#[allow(clippy::module_inception)]
pub mod profiles;
pub mod save_user_data_request;
pub mod save_user_data_response;
