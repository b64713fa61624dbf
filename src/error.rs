/*!
 * Error types for the greeter client
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REMOTE: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Unsupported scheme {0:?} (only plaintext http:// endpoints are supported)")]
    UnsupportedScheme(String),

    #[error("gRPC transport error: {}", root_cause(.0))]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Innermost error in a source chain; transport errors wrap the useful
/// message (e.g. "Connection refused") several layers down
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

impl ClientError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Transport(_) | ClientError::Status(_) => EXIT_REMOTE,
            ClientError::InvalidEndpoint { .. }
            | ClientError::UnsupportedScheme(_)
            | ClientError::Config(_)
            | ClientError::Io(_) => EXIT_FATAL,
        }
    }

    /// True when the failure came from the peer or the network rather than
    /// from local setup
    pub fn is_remote(&self) -> bool {
        self.exit_code() == EXIT_REMOTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_remote() {
        let err: ClientError = tonic::Status::unavailable("peer gone").into();
        assert!(err.is_remote());
        assert_eq!(err.exit_code(), EXIT_REMOTE);
        assert!(err.to_string().contains("peer gone"));
    }

    #[test]
    fn test_local_errors_are_fatal() {
        let errors = vec![
            ClientError::InvalidEndpoint {
                endpoint: "::".to_string(),
                reason: "bad uri".to_string(),
            },
            ClientError::UnsupportedScheme("https".to_string()),
            ClientError::Config("missing".to_string()),
            ClientError::Io(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), EXIT_FATAL, "{}", err);
            assert!(!err.is_remote());
        }
    }

    #[test]
    fn test_root_cause_walks_source_chain() {
        #[derive(Error, Debug)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(root_cause(&err), "Connection refused");
        assert_eq!(root_cause(&std::io::Error::other("flat")), "flat");
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        assert_ne!(EXIT_REMOTE, EXIT_SUCCESS);
        assert_ne!(EXIT_FATAL, EXIT_SUCCESS);
    }
}
