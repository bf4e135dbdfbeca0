//! Aggregate views over the prioritized order list.

mod aggregate;
mod types;

pub use aggregate::{client_summary, urgency_summary};
pub use types::{ClientSummary, UrgencyBucket, UrgencySummary};
