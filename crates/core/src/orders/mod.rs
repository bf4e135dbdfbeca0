//! Production orders: extraction from spreadsheet rows and prioritization.
//!
//! Each upload produces a fresh `Vec<Order>`; orders are never mutated after
//! extraction.

mod error;
mod extract;
mod format;
mod prioritize;
mod types;

pub use error::ExtractError;
pub use extract::{parse_minutes, OrderExtractor};
pub use format::time_left_label;
pub use prioritize::prioritize;
pub use types::{serde_minutes, Order, MISSING, UNDEFINED_ID};
