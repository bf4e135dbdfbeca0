use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::spreadsheet::ByteSource;

use super::error::PipelineError;
use super::plan::{LoadedPlan, PlanPipeline, ProductionPlan};

/// A published plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSnapshot {
    pub generation: u64,
    pub source_name: String,
    pub content_hash: String,
    pub size_bytes: usize,
    pub loaded_at: DateTime<Utc>,
    pub plan: ProductionPlan,
}

/// What the output slot currently holds.
#[derive(Debug, Clone)]
pub enum PlanState {
    Empty,
    Processing { generation: u64 },
    Ready(Arc<PlanSnapshot>),
    Failed { generation: u64, message: String },
}

impl PlanState {
    pub fn name(&self) -> &'static str {
        match self {
            PlanState::Empty => "empty",
            PlanState::Processing { .. } => "processing",
            PlanState::Ready(_) => "ready",
            PlanState::Failed { .. } => "failed",
        }
    }
}

/// Result of finishing one upload.
#[derive(Debug)]
pub enum UploadOutcome {
    Ready(Arc<PlanSnapshot>),
    Failed(PipelineError),
    /// A newer upload or a reset started while this one ran. Its result was
    /// discarded.
    Superseded { generation: u64, current: u64 },
}

impl UploadOutcome {
    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            UploadOutcome::Ready(_) => "ok",
            UploadOutcome::Failed(e) => e.kind(),
            UploadOutcome::Superseded { .. } => "superseded",
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    state: PlanState,
}

/// Single-flight output slot for derived plans.
///
/// Starting an upload clears the previous plan. Completion publishes only if
/// no newer upload or reset happened in between, so a stale run can never
/// overwrite fresher results.
#[derive(Debug)]
pub struct PlanStore {
    slot: RwLock<Slot>,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanStore {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(Slot {
                generation: 0,
                state: PlanState::Empty,
            }),
        }
    }

    /// Starts a new upload and returns its generation.
    pub async fn begin(&self) -> u64 {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.state = PlanState::Processing {
            generation: slot.generation,
        };
        slot.generation
    }

    /// Publishes the result of upload `generation` if it is still current.
    pub async fn complete(
        &self,
        generation: u64,
        result: Result<LoadedPlan, PipelineError>,
    ) -> UploadOutcome {
        let mut slot = self.slot.write().await;
        if slot.generation != generation {
            warn!(
                generation,
                current = slot.generation,
                "Discarding superseded upload"
            );
            return UploadOutcome::Superseded {
                generation,
                current: slot.generation,
            };
        }

        match result {
            Ok(loaded) => {
                let snapshot = Arc::new(PlanSnapshot {
                    generation,
                    source_name: loaded.source_name,
                    content_hash: loaded.content_hash,
                    size_bytes: loaded.size_bytes,
                    loaded_at: Utc::now(),
                    plan: loaded.plan,
                });
                slot.state = PlanState::Ready(Arc::clone(&snapshot));
                info!(
                    generation,
                    source = %snapshot.source_name,
                    orders = snapshot.plan.orders.len(),
                    "Plan published"
                );
                UploadOutcome::Ready(snapshot)
            }
            Err(e) => {
                warn!(generation, kind = e.kind(), error = %e, "Upload failed");
                slot.state = PlanState::Failed {
                    generation,
                    message: e.user_message(),
                };
                UploadOutcome::Failed(e)
            }
        }
    }

    /// Runs `source` through `pipeline` as a new upload.
    pub async fn load(&self, pipeline: &PlanPipeline, source: &dyn ByteSource) -> UploadOutcome {
        let generation = self.begin().await;
        self.process(generation, pipeline, source).await
    }

    /// Runs `source` for an upload that already called [`begin`](Self::begin).
    ///
    /// Skips the pipeline when the upload was superseded in the meantime.
    pub async fn process(
        &self,
        generation: u64,
        pipeline: &PlanPipeline,
        source: &dyn ByteSource,
    ) -> UploadOutcome {
        let current = self.generation().await;
        if current != generation {
            warn!(generation, current, "Skipping superseded upload");
            return UploadOutcome::Superseded {
                generation,
                current,
            };
        }
        let result = pipeline.process(source).await;
        self.complete(generation, result).await
    }

    /// Clears all outputs. Any upload in flight will be discarded.
    pub async fn reset(&self) -> u64 {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.state = PlanState::Empty;
        info!(generation = slot.generation, "Plan reset");
        slot.generation
    }

    pub async fn state(&self) -> PlanState {
        self.slot.read().await.state.clone()
    }

    /// The published plan, if any.
    pub async fn snapshot(&self) -> Option<Arc<PlanSnapshot>> {
        match &self.slot.read().await.state {
            PlanState::Ready(snapshot) => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }

    pub async fn generation(&self) -> u64 {
        self.slot.read().await.generation
    }
}
