use std::sync::Arc;

use finplan_core::{Config, PlanPipeline, PlanStore, SpreadsheetDecoder};

/// Shared application state
pub struct AppState {
    config: Config,
    pipeline: PlanPipeline,
    store: PlanStore,
}

impl AppState {
    pub fn new(config: Config, decoder: Arc<dyn SpreadsheetDecoder>) -> Self {
        let pipeline = PlanPipeline::new(decoder, config.columns);
        Self {
            config,
            pipeline,
            store: PlanStore::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pipeline(&self) -> &PlanPipeline {
        &self.pipeline
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Conversion factor from workload minutes to meters.
    pub fn meters_per_minute(&self) -> f64 {
        self.config.line.meters_per_minute
    }
}
