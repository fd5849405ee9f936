use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while syncing wallpapers
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// A listing or image URL could not be built
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Target path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Log file could not be set up
    #[error("logging setup failed: {0}")]
    Logging(String),
}
