use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The sheet decoded but no row passed the acceptance filter.
    #[error(
        "No valid data found in the specified columns ({rows_scanned} rows scanned). \
         Please check the file format."
    )]
    NoValidData { rows_scanned: usize },
}
