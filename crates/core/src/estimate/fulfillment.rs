use serde::{Deserialize, Serialize};

use crate::orders::{serde_minutes, Order};

/// Minutes until a new order would be fulfilled: the remaining time of
/// every queued order plus the new order's processing time.
///
/// Any order without a usable duration makes the result infinite.
pub fn estimate_fulfillment(orders: &[Order], processing_time: u32) -> f64 {
    let queued: f64 = orders.iter().map(|o| o.minutes_to_complete).sum();
    queued + f64::from(processing_time)
}

/// An estimate ready to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentEstimate {
    #[serde(with = "serde_minutes")]
    pub minutes: f64,
    pub formatted: String,
    pub schedulable: bool,
}

impl FulfillmentEstimate {
    pub fn new(minutes: f64) -> Self {
        Self {
            minutes,
            formatted: format_fulfillment(minutes),
            schedulable: minutes.is_finite(),
        }
    }
}

/// Formats minutes as `"2 days, 3 hours, 5 minutes"`, dropping zero parts.
pub fn format_fulfillment(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "cannot be scheduled".to_string();
    }
    if minutes < 0.0 {
        return "N/A".to_string();
    }
    if minutes == 0.0 {
        return "0 minutes".to_string();
    }

    let days = (minutes / 1440.0).floor() as u64;
    let rest = minutes % 1440.0;
    let hours = (rest / 60.0).floor() as u64;
    let mins = (rest % 60.0).floor() as u64;

    let parts: Vec<String> = [(days, "day"), (hours, "hour"), (mins, "minute")]
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{} {}{}", n, unit, if *n > 1 { "s" } else { "" }))
        .collect();

    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(", ")
    }
}
