//! Error types for the host side: terminal I/O, layout and logger setup.
//!
//! State operations themselves cannot fail.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal read/write failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// Taffy rejected the layout tree
    #[error("layout computation failed: {0:?}")]
    Layout(taffy::TaffyError),

    /// A global logger was already installed
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<taffy::TaffyError> for Error {
    fn from(err: taffy::TaffyError) -> Self {
        Error::Layout(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::Other, "closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O error: closed");
    }
}
