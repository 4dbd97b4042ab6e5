use thiserror::Error;

/// Errors raised while validating user requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
