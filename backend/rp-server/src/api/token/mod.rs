pub mod get_token_request;
#[allow(clippy::module_inception)]
pub mod token;
pub mod token_response;
