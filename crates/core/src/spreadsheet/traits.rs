//! Trait definitions for the spreadsheet module.

use async_trait::async_trait;

use super::error::{DecodeError, ReadError};
use super::types::Grid;

/// Something that can produce the raw bytes of an uploaded file.
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Display name of the file (used in logs and snapshots).
    fn name(&self) -> &str;

    /// Reads the whole file into memory.
    async fn read_bytes(&self) -> Result<Vec<u8>, ReadError>;
}

/// A decoder that turns workbook bytes into the grid of the first sheet.
#[async_trait]
pub trait SpreadsheetDecoder: Send + Sync {
    /// Returns the name of this decoder implementation.
    fn name(&self) -> &str;

    /// Decodes the first worksheet of the workbook.
    async fn decode(&self, bytes: Vec<u8>) -> Result<Grid, DecodeError>;
}

/// Decoder used when no spreadsheet support is wired in.
///
/// Every call fails with [`DecodeError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableDecoder;

#[async_trait]
impl SpreadsheetDecoder for UnavailableDecoder {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn decode(&self, _bytes: Vec<u8>) -> Result<Grid, DecodeError> {
        Err(DecodeError::Unavailable(
            "no spreadsheet decoder configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_decoder_always_fails() {
        let decoder = UnavailableDecoder;
        let result = decoder.decode(vec![1, 2, 3]).await;
        assert!(matches!(result, Err(DecodeError::Unavailable(_))));
        assert_eq!(decoder.name(), "unavailable");
    }
}
