mod error;
mod extractors;
mod get_token_request;
