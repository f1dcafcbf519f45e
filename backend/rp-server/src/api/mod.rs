pub mod error;
pub mod extractors;
pub mod profiles;
pub mod token;
