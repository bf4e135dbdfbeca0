use std::cmp::Ordering;

use super::types::Order;

/// Sorts orders by remaining time, most urgent first.
///
/// The sort is stable: orders with equal remaining time keep their sheet
/// order. Orders without a usable duration (`f64::INFINITY`) end up last.
pub fn prioritize(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| {
        a.minutes_to_complete
            .partial_cmp(&b.minutes_to_complete)
            .unwrap_or(Ordering::Equal)
    });
    orders
}
