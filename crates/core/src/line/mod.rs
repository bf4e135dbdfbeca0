//! The finishing line: machine capacities, flow topology, and workload.
//!
//! The capacity table and the topology are process-wide constants. Workload
//! is derived per upload by folding orders onto machines via their
//! `finishing` field.
//!
//! # Example
//!
//! ```ignore
//! use finplan_core::line::{line_view, map_workload, MACHINE_CAPACITIES, PRODUCTION_LINE};
//!
//! let workload = map_workload(&orders);
//! for step in line_view(&PRODUCTION_LINE, &workload, 125.0) {
//!     println!("{:?}", step);
//! }
//! ```

mod capacity;
mod topology;
mod utilization;
mod workload;

pub use capacity::{Machine, MachineCapacityTable, MACHINE_CAPACITIES};
pub use topology::{FlowStep, ProductionLine, PRODUCTION_LINE};
pub use utilization::{line_view, stage_load, FlowStepLoad, LoadLevel, StageLoad};
pub use workload::{map_workload, map_workload_with, MachineWorkload};
