pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::agent_bearer::AgentBearer,
    profiles::{
        profiles::save_user_data, save_user_data_request::SaveUserDataRequest,
        save_user_data_response::SaveUserDataResponse,
    },
    token::{get_token_request::GetTokenRequest, token::get_token, token_response::TokenResponse},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
