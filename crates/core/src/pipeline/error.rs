use thiserror::Error;

use crate::orders::ExtractError;
use crate::spreadsheet::{DecodeError, ReadError};

/// Errors that abort an upload.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    FileRead(#[from] ReadError),

    #[error("Failed to parse spreadsheet: {0}")]
    FileParse(#[from] DecodeError),

    #[error(transparent)]
    NoValidData(#[from] ExtractError),
}

impl PipelineError {
    /// The single message shown to the user for a failed upload.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short stable identifier, used in logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::FileRead(_) => "file_read",
            PipelineError::FileParse(_) => "file_parse",
            PipelineError::NoValidData(_) => "no_valid_data",
        }
    }
}
