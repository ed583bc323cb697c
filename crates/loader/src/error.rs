use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Sequence error: {0}")]
    SequenceError(#[from] tde4_sequence::SequenceError),

    #[error("No cameras exist; create a sequence camera and try again")]
    NoCameras,

    #[error("No sequence cameras selected; select a sequence camera and try again")]
    NoSequenceCamerasSelected,

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl LoaderError {
    /// Stable machine-readable code for error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            Self::SequenceError(err) => err.code(),
            Self::NoCameras => "no_cameras",
            Self::NoSequenceCamerasSelected => "no_sequence_cameras_selected",
            Self::UnknownAction(_) => "unknown_action",
        }
    }
}
