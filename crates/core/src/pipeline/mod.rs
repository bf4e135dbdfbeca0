//! The upload pipeline: bytes in, a complete production plan out.
//!
//! - [`PlanPipeline`] runs read → decode → extract → prioritize → aggregate
//!   and either returns every output or an error, never a partial plan.
//! - [`PlanStore`] is the single output slot. Each upload takes a generation;
//!   only the newest generation may publish.

mod error;
mod plan;
mod store;

pub use error::PipelineError;
pub use plan::{LoadedPlan, PlanPipeline, ProductionPlan};
pub use store::{PlanSnapshot, PlanState, PlanStore, UploadOutcome};
