//! Mock spreadsheet decoder for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::spreadsheet::{DecodeError, Grid, SpreadsheetDecoder};

/// Mock implementation of the SpreadsheetDecoder trait.
///
/// Ignores the bytes it is given and returns the configured grid. Useful for:
/// - Feeding hand-built grids through the pipeline
/// - Simulating unreadable workbooks
/// - Holding a decode open to test superseded uploads
#[derive(Debug, Clone)]
pub struct MockDecoder {
    /// Grid returned by every successful decode.
    grid: Arc<RwLock<Grid>>,
    /// If set, the next decode fails with this error.
    next_error: Arc<RwLock<Option<DecodeError>>>,
    /// Simulated decode time.
    delay: Arc<RwLock<Duration>>,
    /// Sizes of the byte buffers seen, in call order.
    calls: Arc<RwLock<Vec<usize>>>,
}

impl Default for MockDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDecoder {
    /// Create a mock decoder that returns an empty grid.
    pub fn new() -> Self {
        Self::with_grid(Grid::default())
    }

    /// Create a mock decoder that returns `grid`.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid: Arc::new(RwLock::new(grid)),
            next_error: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(Duration::ZERO)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the grid returned by later decodes.
    pub async fn set_grid(&self, grid: Grid) {
        *self.grid.write().await = grid;
    }

    /// Make the next decode fail with the given error.
    pub async fn set_next_error(&self, error: DecodeError) {
        *self.next_error.write().await = Some(error);
    }

    /// Set how long each decode takes.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }

    /// Number of decodes performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Byte lengths passed to each decode.
    pub async fn recorded_sizes(&self) -> Vec<usize> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl SpreadsheetDecoder for MockDecoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn decode(&self, bytes: Vec<u8>) -> Result<Grid, DecodeError> {
        self.calls.write().await.push(bytes.len());

        let delay = *self.delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.grid.read().await.clone())
    }
}
