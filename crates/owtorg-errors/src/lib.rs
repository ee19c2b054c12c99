//! Error facility for the owtorg logging facade
//!
//! One error enum covers every failure the facade can report, plus a stable
//! kind/code taxonomy for programmatic handling and diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FacadeError
pub type Result<T> = std::result::Result<T, FacadeError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that is safe to match on in tests
/// and to record in diagnostic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An initialization callback failed while a logger was being initialized
    InitCallback,
    /// The file backend could not open its target for append
    FileOpen,
    /// A backend could not write its line
    Write,
    /// One or more members of a composite logger failed
    Dispatch,
    /// Configuration was rejected
    InvalidConfig,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InitCallback => "ERR_INIT_CALLBACK",
            ErrorKind::FileOpen => "ERR_FILE_OPEN",
            ErrorKind::Write => "ERR_WRITE",
            ErrorKind::Dispatch => "ERR_DISPATCH",
            ErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Errors raised by loggers, composites and configuration
#[derive(Error, Debug)]
pub enum FacadeError {
    /// An init callback returned an error; `index` is its registration position
    #[error("Init callback #{index} for {logger} logger failed: {source}")]
    InitCallback {
        logger: &'static str,
        index: usize,
        #[source]
        source: Box<FacadeError>,
    },

    /// The log file could not be opened for append
    #[error("Failed to open log file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be written to its medium
    #[error("Failed to write log line to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Several members of a composite failed; the first failure is kept
    #[error("{failed} of {total} loggers failed, first failure: {first}")]
    Dispatch {
        failed: usize,
        total: usize,
        #[source]
        first: Box<FacadeError>,
    },

    /// Configuration was malformed or rejected by a callback
    #[error("Invalid logger configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl FacadeError {
    /// Shorthand used by init callbacks to reject their configuration
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        FacadeError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            FacadeError::InitCallback { .. } => ErrorKind::InitCallback,
            FacadeError::FileOpen { .. } => ErrorKind::FileOpen,
            FacadeError::Write { .. } => ErrorKind::Write,
            FacadeError::Dispatch { .. } => ErrorKind::Dispatch,
            FacadeError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Walk through init-callback and dispatch wrappers to the underlying cause
    pub fn root_cause(&self) -> &FacadeError {
        match self {
            FacadeError::InitCallback { source, .. } => source.root_cause(),
            FacadeError::Dispatch { first, .. } => first.root_cause(),
            other => other,
        }
    }
}
