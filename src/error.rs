use thiserror::Error;

/// Errors raised while constructing or driving a flip display.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlipError {
    #[error("render target is missing or no longer part of the surface")]
    MissingTarget,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FlipError>;
