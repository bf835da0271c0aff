use thiserror::Error;

pub type CommandResult<T> = Result<T, GreetError>;

/// Validation failures for a greeting request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreetError {
    #[error("Point count must be postitive.")]
    NonPositivePoints,
    #[error("Too many exclamation points. Max is 5.")]
    TooManyPoints,
}
