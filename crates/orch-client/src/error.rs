//! Error types for command dispatch.

use std::fmt;

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned when invoking an Orchestrator command.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The command is not in the endpoint grammar. No request was sent.
    #[error("orchestrator command {command} is not valid")]
    UnknownCommand {
        /// The requested command.
        command: String,
    },

    /// The argument count matches none of the command's shapes. No request
    /// was sent.
    #[error(
        "command {command} expects {} argument(s) but {given} were given; usage: {}",
        alternatives(.expected),
        usage_line(.command, .usages)
    )]
    ArgumentCountMismatch {
        /// The requested command.
        command: String,
        /// Number of arguments supplied.
        given: usize,
        /// Accepted argument counts, in registration order.
        expected: Vec<usize>,
        /// One rendered usage hint per registered shape.
        usages: Vec<String>,
    },

    /// The server answered with a 3xx status.
    #[error(
        "command {command} resulted in redirect [{status}] {body}, please verify that the base orchestrator URL {base_url} is correct"
    )]
    Redirection {
        /// The requested command.
        command: String,
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
        /// Configured base URL.
        base_url: String,
    },

    /// The server answered with a 4xx status.
    #[error("command {command} resulted in client error [{status}] {body}")]
    ClientRequest {
        /// The requested command.
        command: String,
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The server answered with a 5xx status.
    #[error("command {command} resulted in server error [{status}] {body}")]
    ServerSide {
        /// The requested command.
        command: String,
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The server answered with a success status but the body is not JSON.
    #[error("response to command {command} [{status}] cannot be JSON decoded; response is {body}")]
    UndecodableResponse {
        /// The requested command.
        command: String,
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed before a response was received.
    #[error("command {command} failed calling {url}: {source}")]
    Transport {
        /// The requested command.
        command: String,
        /// URL that was being requested.
        url: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// No command matches the method name.
    #[error("no such attribute or method: {name}")]
    NoSuchMethod {
        /// The requested method name.
        name: String,
    },
}

/// Coarse classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Command missing from the grammar.
    UnknownCommand,
    /// Wrong number of arguments.
    ArgumentCountMismatch,
    /// 4xx response.
    ClientRequest,
    /// 5xx response, or a success response whose body is not JSON.
    ServerSide,
    /// 3xx response.
    Redirection,
    /// Network-level failure.
    Transport,
    /// Method name with no matching command.
    NoSuchMethod,
}

impl ErrorKind {
    /// Stable short code for programmatic matching.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown_command",
            Self::ArgumentCountMismatch => "argument_count_mismatch",
            Self::ClientRequest => "client_request",
            Self::ServerSide => "server_side",
            Self::Redirection => "redirection",
            Self::Transport => "transport",
            Self::NoSuchMethod => "no_such_method",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl ClientError {
    /// Classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            Self::ArgumentCountMismatch { .. } => ErrorKind::ArgumentCountMismatch,
            Self::Redirection { .. } => ErrorKind::Redirection,
            Self::ClientRequest { .. } => ErrorKind::ClientRequest,
            Self::ServerSide { .. } | Self::UndecodableResponse { .. } => ErrorKind::ServerSide,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::NoSuchMethod { .. } => ErrorKind::NoSuchMethod,
        }
    }

    /// Stable short code, shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Redirection { status, .. }
            | Self::ClientRequest { status, .. }
            | Self::ServerSide { status, .. }
            | Self::UndecodableResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when a response was received.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Redirection { body, .. }
            | Self::ClientRequest { body, .. }
            | Self::ServerSide { body, .. }
            | Self::UndecodableResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    /// URL of the request, when one was sent.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Redirection { url, .. }
            | Self::ClientRequest { url, .. }
            | Self::ServerSide { url, .. }
            | Self::UndecodableResponse { url, .. }
            | Self::Transport { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Command the error relates to. `None` for [`ClientError::NoSuchMethod`].
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::UnknownCommand { command }
            | Self::ArgumentCountMismatch { command, .. }
            | Self::Redirection { command, .. }
            | Self::ClientRequest { command, .. }
            | Self::ServerSide { command, .. }
            | Self::UndecodableResponse { command, .. }
            | Self::Transport { command, .. } => Some(command),
            Self::NoSuchMethod { .. } => None,
        }
    }

    /// Whether the call was rejected locally, before any request was sent.
    #[must_use]
    pub const fn is_client_side(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnknownCommand | ErrorKind::ArgumentCountMismatch | ErrorKind::NoSuchMethod
        )
    }
}

fn alternatives(counts: &[usize]) -> String {
    let counts: Vec<String> = counts.iter().map(ToString::to_string).collect();
    counts.join(" or ")
}

fn usage_line(command: &str, usages: &[String]) -> String {
    let lines: Vec<String> = usages.iter().map(|usage| format!("{command} {usage}")).collect();
    lines.join(" | ")
}
