use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::orders::Order;

use super::capacity::{MachineCapacityTable, MACHINE_CAPACITIES};

/// Cumulative workload of one machine against its capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineWorkload {
    pub name: String,
    /// Sum of remaining minutes of the orders routed to this machine.
    pub workload: f64,
    /// Capacity in meters; 0 for machines outside the capacity table.
    pub capacity: u64,
}

/// Folds orders onto the line's machines. See [`map_workload_with`].
pub fn map_workload(orders: &[Order]) -> Vec<MachineWorkload> {
    map_workload_with(&MACHINE_CAPACITIES, orders)
}

/// Folds orders onto the machines of `table`.
///
/// Every machine in the table gets an entry, even at zero workload. An order
/// contributes when its trimmed `finishing` is non-empty and its remaining
/// time is finite and positive. The finishing name is matched against the
/// table case-insensitively; names with no match are kept as ad-hoc machines
/// with capacity 0 rather than dropped.
///
/// The result is sorted by capacity, largest first. Equal capacities keep
/// table order, and ad-hoc machines come last in the order they were first
/// seen.
pub fn map_workload_with(
    table: &MachineCapacityTable,
    orders: &[Order],
) -> Vec<MachineWorkload> {
    let mut totals: Vec<(String, f64)> = table
        .machines()
        .map(|m| (m.name.to_string(), 0.0))
        .collect();
    let mut index: HashMap<String, usize> = totals
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (name.clone(), i))
        .collect();

    for order in orders {
        let finishing = order.finishing.trim();
        let minutes = order.minutes_to_complete;
        if finishing.is_empty() || !minutes.is_finite() || minutes <= 0.0 {
            continue;
        }

        let key = table.resolve(finishing).unwrap_or(finishing);
        let slot = match index.get(key) {
            Some(&i) => i,
            None => {
                debug!(finishing = %key, "Finishing not on the line, tracking as ad-hoc machine");
                index.insert(key.to_string(), totals.len());
                totals.push((key.to_string(), 0.0));
                totals.len() - 1
            }
        };
        totals[slot].1 += minutes;
    }

    let mut workload: Vec<MachineWorkload> = totals
        .into_iter()
        .map(|(name, workload)| MachineWorkload {
            capacity: table.capacity(&name).unwrap_or(0),
            name,
            workload,
        })
        .collect();

    workload.sort_by(|a, b| b.capacity.cmp(&a.capacity));
    workload
}
