//! CLI error types.

use std::path::PathBuf;

use orch_client::ClientError;
use thiserror::Error;

/// Exit code for calls rejected before any request was sent.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The Orchestrator call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The endpoint grammar file could not be read.
    #[error("cannot read endpoint grammar {}: {source}", .path.display())]
    Endpoints {
        /// Path of the grammar file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Client(err) if err.is_client_side() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_is_transparent() {
        let err = CliError::from(ClientError::UnknownCommand {
            command: "nope".into(),
        });
        assert_eq!(err.to_string(), "orchestrator command nope is not valid");
    }

    #[test]
    fn local_rejections_exit_with_usage_code() {
        let err = CliError::from(ClientError::NoSuchMethod {
            name: "nope".into(),
        });
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn server_errors_exit_with_failure_code() {
        let err = CliError::from(ClientError::ServerSide {
            command: "clusters".into(),
            url: "http://h/api/clusters".into(),
            status: 500,
            body: String::new(),
        });
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn endpoints_error_names_the_file() {
        let err = CliError::Endpoints {
            path: PathBuf::from("/tmp/missing.endpoints"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read endpoint grammar /tmp/missing.endpoints: not found"
        );
    }

    #[test]
    fn cli_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let cli_err = CliError::from(io_err);
        assert!(matches!(cli_err, CliError::Io(_)));
    }
}
