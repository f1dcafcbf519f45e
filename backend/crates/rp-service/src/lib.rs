pub mod error;
pub mod identity_resolver;
pub mod profile_writer;
pub mod token_issuer;

pub use error::{Result as ServiceResult, ServiceError};
pub use identity_resolver::IdentityResolver;
pub use profile_writer::ProfileWriter;
pub use token_issuer::TokenIssuer;
