use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Signing credentials are not configured {location}")]
    MissingSigningKey { location: ErrorLocation },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSigningKey { .. } => "MISSING_SIGNING_KEY",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::Forbidden { .. } => "FORBIDDEN",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
