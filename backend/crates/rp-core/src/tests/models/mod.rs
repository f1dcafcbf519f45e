mod identity_metadata;
mod profile_draft;
mod session_credential;
