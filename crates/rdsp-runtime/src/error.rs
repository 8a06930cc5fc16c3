use std::fmt;

use bollard::errors::Error as DockerError;
use thiserror::Error;

/// Coarse classification of a runtime failure.
///
/// Used for logging only; HTTP responses carry the message verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// The container does not exist.
    NotFound,
    /// The daemon could not be reached (socket missing, refused, timed out).
    Unreachable,
    /// The daemon refused the call.
    PermissionDenied,
    /// Anything else, including lifecycle precondition failures.
    Other,
}

impl RuntimeErrorKind {
    /// Classifies an HTTP status returned by the daemon.
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            404 => Self::NotFound,
            401 | 403 => Self::PermissionDenied,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeErrorKind::NotFound => "not_found",
            RuntimeErrorKind::Unreachable => "unreachable",
            RuntimeErrorKind::PermissionDenied => "permission_denied",
            RuntimeErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an inspect or lifecycle call.
///
/// `Display` is exactly the runtime's message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    message: String,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl From<DockerError> for RuntimeError {
    fn from(err: DockerError) -> Self {
        let kind = match &err {
            DockerError::DockerResponseServerError { status_code, .. } => {
                RuntimeErrorKind::from_status(*status_code)
            }
            DockerError::IOError { .. }
            | DockerError::SocketNotFoundError(_)
            | DockerError::HyperLegacyError { .. }
            | DockerError::RequestTimeoutError => RuntimeErrorKind::Unreachable,
            _ => RuntimeErrorKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn server_error(status_code: u16, message: &str) -> DockerError {
        DockerError::DockerResponseServerError {
            status_code,
            message: message.to_string(),
        }
    }

    #[test]
    fn missing_container_is_not_found() {
        let err = RuntimeError::from(server_error(404, "No such container: raft_rds"));

        assert_eq!(err.kind(), RuntimeErrorKind::NotFound);
        assert!(err.to_string().contains("No such container: raft_rds"));
    }

    #[test]
    fn display_is_the_docker_message() {
        let source = server_error(304, "container already started");
        let expected = source.to_string();

        let err = RuntimeError::from(source);
        assert_eq!(err.kind(), RuntimeErrorKind::Other);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn forbidden_is_permission_denied() {
        let err = RuntimeError::from(server_error(403, "forbidden"));
        assert_eq!(err.kind(), RuntimeErrorKind::PermissionDenied);
    }

    #[test]
    fn socket_errors_are_unreachable() {
        let err = RuntimeError::from(DockerError::IOError {
            err: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        });
        assert_eq!(err.kind(), RuntimeErrorKind::Unreachable);
    }

    #[test]
    fn missing_socket_is_unreachable() {
        let err = RuntimeError::from(DockerError::SocketNotFoundError(
            "/nonexistent/docker.sock".to_string(),
        ));
        assert_eq!(err.kind(), RuntimeErrorKind::Unreachable);
        assert!(err.to_string().contains("/nonexistent/docker.sock"));
    }

    #[test]
    fn status_classification() {
        assert_eq!(RuntimeErrorKind::from_status(404), RuntimeErrorKind::NotFound);
        assert_eq!(
            RuntimeErrorKind::from_status(401),
            RuntimeErrorKind::PermissionDenied
        );
        assert_eq!(RuntimeErrorKind::from_status(409), RuntimeErrorKind::Other);
        assert_eq!(RuntimeErrorKind::from_status(500), RuntimeErrorKind::Other);
    }
}
