use serde::Serialize;
use std::collections::HashMap;

use super::topology::{FlowStep, ProductionLine};
use super::workload::MachineWorkload;

/// How loaded a stage is, by utilization percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    Idle,
    Normal,
    /// Above 75%.
    High,
    /// Above 95%.
    Critical,
}

impl LoadLevel {
    pub fn for_utilization(percent: f64) -> Self {
        if percent == 0.0 {
            LoadLevel::Idle
        } else if percent > 95.0 {
            LoadLevel::Critical
        } else if percent > 75.0 {
            LoadLevel::High
        } else {
            LoadLevel::Normal
        }
    }
}

/// Workload of a single stage converted to meters and compared with its
/// capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageLoad {
    pub name: String,
    pub workload_minutes: f64,
    pub workload_meters: f64,
    pub capacity: u64,
    /// Capped at 100.
    pub utilization_percent: f64,
    pub level: LoadLevel,
    pub highlighted: bool,
}

/// A flow step with the load of each of its stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowStepLoad {
    Stage { stage: StageLoad },
    Split { lanes: Vec<Vec<StageLoad>> },
}

pub fn stage_load(
    name: &str,
    workload_minutes: f64,
    capacity: u64,
    meters_per_minute: f64,
    highlighted: bool,
) -> StageLoad {
    let workload_meters = workload_minutes * meters_per_minute;
    let utilization_percent = if capacity > 0 {
        (workload_meters / capacity as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    StageLoad {
        name: name.to_string(),
        workload_minutes,
        workload_meters,
        capacity,
        utilization_percent,
        level: LoadLevel::for_utilization(utilization_percent),
        highlighted,
    }
}

/// Joins computed workload onto the line topology.
///
/// Only stages of the topology are listed; ad-hoc workload entries for
/// finishing names outside the line are left out. Stages missing from
/// `workload` read as idle with zero capacity.
pub fn line_view(
    line: &ProductionLine,
    workload: &[MachineWorkload],
    meters_per_minute: f64,
) -> Vec<FlowStepLoad> {
    let by_name: HashMap<&str, &MachineWorkload> =
        workload.iter().map(|m| (m.name.as_str(), m)).collect();

    let load = |name: &str| {
        let (minutes, capacity) = by_name
            .get(name)
            .map(|m| (m.workload, m.capacity))
            .unwrap_or((0.0, 0));
        stage_load(
            name,
            minutes,
            capacity,
            meters_per_minute,
            line.is_highlighted(name),
        )
    };

    line.steps()
        .iter()
        .map(|step| match step {
            FlowStep::Stage { name } => FlowStepLoad::Stage { stage: load(name) },
            FlowStep::Split { lanes } => FlowStepLoad::Split {
                lanes: lanes
                    .iter()
                    .map(|lane| lane.iter().map(|name| load(name)).collect())
                    .collect(),
            },
        })
        .collect()
}
