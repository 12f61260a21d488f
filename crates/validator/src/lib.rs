#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub use error::*;

/// Checks a value against its own field rules before it is allowed
/// to cross into persistence or configuration code.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}
