//! Error type shared by every tmux operation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving tmux.
#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux is not installed on the system: {0}")]
    NotInstalled(#[source] which::Error),

    #[error("invalid socket: {}", .0.display())]
    InvalidSocket(PathBuf),

    #[error("invalid tmux session name: {0:?}")]
    InvalidSessionName(String),

    #[error("failed to launch {}: {source}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tmux exited with {}: {stderr}", describe_status(.status))]
    ExternalProcess {
        /// Exit code, `None` when the process was killed by a signal.
        status: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    #[error("malformed tmux output: expected {expected} fields, got {actual} in {line:?}")]
    MalformedOutput {
        expected: usize,
        actual: usize,
        line: String,
    },

    #[error("tmux returned no output")]
    EmptyOutput,

    #[error("{context}")]
    Operation {
        context: &'static str,
        #[source]
        source: Box<TmuxError>,
    },
}

impl TmuxError {
    /// Wrap this error with an operation-specific message.
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Self::Operation {
            context,
            source: Box::new(self),
        }
    }

    /// True when the external process failed to start or exited non-zero,
    /// looking through any operation context.
    #[must_use]
    pub fn is_external_process(&self) -> bool {
        match self {
            Self::Launch { .. } | Self::ExternalProcess { .. } => true,
            Self::Operation { source, .. } => source.is_external_process(),
            _ => false,
        }
    }

    /// True when tmux output did not line up with the requested variables.
    #[must_use]
    pub fn is_malformed_output(&self) -> bool {
        match self {
            Self::MalformedOutput { .. } => true,
            Self::Operation { source, .. } => source.is_malformed_output(),
            _ => false,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "no exit code".to_string(), |code| format!("status {code}"))
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TmuxError>;

/// Attach an operation message to the error side of a result.
pub(crate) trait Context<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_source_kind() {
        let err = TmuxError::ExternalProcess {
            status: Some(1),
            stderr: "can't find window: @9".into(),
        }
        .context("failed to kill window");

        assert_eq!(err.to_string(), "failed to kill window");
        assert!(err.is_external_process());
        assert!(!err.is_malformed_output());

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("tmux exited with status 1: can't find window: @9")
        );
    }

    #[test]
    fn test_malformed_output_kind() {
        let err = TmuxError::MalformedOutput {
            expected: 2,
            actual: 3,
            line: "a-:-b-:-c".into(),
        };
        assert!(err.is_malformed_output());
        assert!(!err.is_external_process());
    }

    #[test]
    fn test_signal_exit_display() {
        let err = TmuxError::ExternalProcess {
            status: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "tmux exited with no exit code: ");
    }
}
