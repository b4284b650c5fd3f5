//! Error types and result alias for the crate.
//!
//! The generation and rasterization paths are total over their domains and
//! never fail; variants here cover invalid configuration and the seams to
//! the external display collaborator (event delivery and presentation).
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("event source error: {0}")]
    EventSource(String),

    #[error("presentation error: {0}")]
    Present(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
