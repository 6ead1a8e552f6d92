//! Error types for rollcall-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while reading a membership source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request never produced an HTTP response (DNS, connect, TLS, body read).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body did not have the expected JSON shape.
    #[error("unexpected response from {context}: {message}")]
    Schema { context: String, message: String },

    /// Credentials are unreadable or invalid.
    #[error("credentials error: {0}")]
    Auth(String),

    /// Credential file I/O failure, with the offending path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// `true` for network failures and non-success HTTP statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, SourceError::Transport { .. } | SourceError::Status { .. })
    }

    /// Convenience constructor for [`SourceError::Schema`].
    pub fn schema(context: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Schema {
            context: context.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_a_transport_failure() {
        let err = SourceError::Status {
            url: "https://api.trello.com/1/members/x".into(),
            status: 404,
        };
        assert!(err.is_transport());
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn schema_is_not_a_transport_failure() {
        let err = SourceError::schema("organization members", "missing field `username`");
        assert!(!err.is_transport());
        assert!(err.to_string().contains("organization members"));
    }
}
