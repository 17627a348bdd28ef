use alloc::string::String;

use thiserror::Error;

/// Error returned by [`parse_bool`](crate::parse_bool).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseBoolError {
    /// The input is not one of the accepted boolean literals.
    #[error("invalid boolean literal {0:?}")]
    Invalid(String),
}
