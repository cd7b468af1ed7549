use thiserror::Error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
    #[error("Invalid format. Expected {expected}")]
    InvalidFormat { expected: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;

/// Returned when a string does not name any variant of a status kind
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not a known {kind}")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}
