use thiserror::Error;

pub type Result<T> = std::result::Result<T, SequenceError>;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Could not find file on disk for published file path: {0:?}")]
    SequenceFileNotFound(String),

    #[error("Inconsistent frame steps in {path:?}: found steps {steps:?}")]
    InconsistentFrameStep { path: String, steps: Vec<i64> },

    #[error("Unsupported sequence path {path:?}: {reason}")]
    UnsupportedInput { path: String, reason: String },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SequenceError {
    pub(crate) fn unsupported(path: &str, reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            Self::SequenceFileNotFound(_) => "sequence_not_found",
            Self::InconsistentFrameStep { .. } => "inconsistent_step",
            Self::UnsupportedInput { .. } => "unsupported_input",
            Self::Pattern(_) => "pattern",
            Self::IoError(_) => "io",
        }
    }
}

impl From<glob::GlobError> for SequenceError {
    fn from(err: glob::GlobError) -> Self {
        Self::IoError(err.into())
    }
}
