//! Spreadsheet capability: raw bytes in, rectangular grid of cells out.
//!
//! Decoding is modelled as an injected capability (`SpreadsheetDecoder`) so
//! the pipeline never checks for a decoder at runtime; a missing decoder is
//! just another implementation whose failure mode is
//! [`DecodeError::Unavailable`].
//!
//! # Example
//!
//! ```ignore
//! use finplan_core::spreadsheet::{ByteSource, CalamineDecoder, PathSource, SpreadsheetDecoder};
//!
//! let source = PathSource::new("orders.xlsx");
//! let bytes = source.read_bytes().await?;
//! let grid = CalamineDecoder::new().decode(bytes).await?;
//! println!("{} rows", grid.len());
//! ```

mod error;
mod source;
mod traits;
mod types;
mod workbook;

pub use error::{DecodeError, ReadError};
pub use source::{MemorySource, PathSource};
pub use traits::{ByteSource, SpreadsheetDecoder, UnavailableDecoder};
pub use types::{Cell, Grid};
pub use workbook::CalamineDecoder;
