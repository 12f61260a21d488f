use serde::Serialize;
use std::fmt::Display;
use validator::ValidateError;

/// Wire-facing classification of every failure a request can end in.
/// The HTTP layer maps each variant to exactly one status code.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    /// Storage-layer fault. The underlying description is surfaced
    /// to the caller; acceptable for trusted deployments only.
    Internal { message: String },
    /// The referenced user id does not exist.
    NotFound,
    /// Another user already holds the submitted email address.
    EmailExists,
    InvalidFormBody(ValidateError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal { .. } => f.write_str("Failed to perform request"),
            Error::NotFound => f.write_str("User not found"),
            Error::EmailExists => f.write_str("A user with this email already exists"),
            Error::InvalidFormBody(..) => f.write_str("User performed request with invalid body"),
        }
    }
}
