//! Error handling.

use std::fmt;

/// Broad category of a failure, used by callers that react differently
/// to a rejected request than to a broken connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Json,
    Network,
    /// The backend answered with a non-success status.
    Status(u16),
    Invalid,
    Other,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Other, message)
    }

    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Status(code), message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Invalid, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Status(code) => write!(f, "{} (status {code})", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_kind(ErrorKind::Io, format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_kind(ErrorKind::Json, format!("JSON error: {err}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status.as_u16(), format!("Request failed: {err}")),
            None if err.is_decode() => {
                Self::with_kind(ErrorKind::Json, format!("Invalid response body: {err}"))
            }
            None => Self::with_kind(ErrorKind::Network, format!("Network error: {err}")),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("Task failed: {err}"))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::new(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::new(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! simple_error {
    ($msg:literal) => {
        $crate::utils::error::Error::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::new(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_keep_their_code() {
        let err = Error::status(406, "no rows");
        assert_eq!(err.kind(), ErrorKind::Status(406));
        assert_eq!(err.to_string(), "no rows (status 406)");
    }

    #[test]
    fn io_errors_convert_with_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.message().contains("missing"));
    }

    #[test]
    fn macro_formats_message() {
        let err = simple_error!("bad value {}", 3);
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.message(), "bad value 3");
    }
}
