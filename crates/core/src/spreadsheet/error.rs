//! Error types for the spreadsheet module.

use thiserror::Error;

/// Errors raised while turning bytes into a grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No decoder is wired in, or the decoder could not run.
    #[error("Spreadsheet decoder is not available: {0}")]
    Unavailable(String),

    /// The bytes are not a workbook any decoder understands.
    #[error("Unsupported or corrupt spreadsheet: {0}")]
    InvalidFormat(String),

    /// The workbook decoded but has no sheets.
    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    /// The first worksheet could not be read.
    #[error("Failed to read worksheet '{sheet}': {reason}")]
    Worksheet { sheet: String, reason: String },
}

/// Errors raised while reading the uploaded file into memory.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("File could not be read: no data")]
    Empty,

    /// The upload body broke off or was malformed before the file arrived.
    #[error("File could not be read: {0}")]
    Transfer(String),

    /// The upload carried no field with the expected name.
    #[error("Missing multipart field '{0}'")]
    MissingField(String),
}
