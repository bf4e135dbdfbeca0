use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::config::ColumnMapping;
use crate::line::{map_workload, MachineWorkload};
use crate::orders::{prioritize, Order, OrderExtractor};
use crate::spreadsheet::{ByteSource, Grid, SpreadsheetDecoder};
use crate::summary::{client_summary, urgency_summary, ClientSummary, UrgencySummary};

use super::error::PipelineError;

/// Everything derived from one spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Orders sorted by remaining time, most urgent first.
    pub orders: Vec<Order>,
    pub client_summary: Vec<ClientSummary>,
    pub urgency_summary: Vec<UrgencySummary>,
    pub machine_workload: Vec<MachineWorkload>,
}

impl ProductionPlan {
    /// Finds an order by exact id.
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }
}

/// A plan together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedPlan {
    pub source_name: String,
    /// Hex SHA-256 of the uploaded bytes.
    pub content_hash: String,
    pub size_bytes: usize,
    pub plan: ProductionPlan,
}

/// Runs uploads through decoding and derivation.
pub struct PlanPipeline {
    decoder: Arc<dyn SpreadsheetDecoder>,
    extractor: OrderExtractor,
}

impl PlanPipeline {
    pub fn new(decoder: Arc<dyn SpreadsheetDecoder>, columns: ColumnMapping) -> Self {
        Self {
            decoder,
            extractor: OrderExtractor::new(columns),
        }
    }

    /// Reads, decodes and derives a full plan from `source`.
    pub async fn process(&self, source: &dyn ByteSource) -> Result<LoadedPlan, PipelineError> {
        let bytes = source.read_bytes().await?;
        let size_bytes = bytes.len();
        let content_hash = format!("{:x}", Sha256::digest(&bytes));
        debug!(
            source = source.name(),
            size_bytes,
            decoder = self.decoder.name(),
            "Decoding upload"
        );

        let grid = self.decoder.decode(bytes).await?;
        let plan = self.derive(&grid)?;

        info!(
            source = source.name(),
            orders = plan.orders.len(),
            clients = plan.client_summary.len(),
            "Production plan derived"
        );

        Ok(LoadedPlan {
            source_name: source.name().to_string(),
            content_hash,
            size_bytes,
            plan,
        })
    }

    /// Derives a plan from an already decoded grid.
    ///
    /// Workload is mapped from orders in sheet order; summaries use the
    /// prioritized list.
    pub fn derive(&self, grid: &Grid) -> Result<ProductionPlan, PipelineError> {
        let extracted = self.extractor.extract(grid)?;
        let machine_workload = map_workload(&extracted);
        let orders = prioritize(extracted);
        let client_summary = client_summary(&orders);
        let urgency_summary = urgency_summary(&orders);

        debug!(
            orders = orders.len(),
            machines = machine_workload.len(),
            "Derived plan outputs"
        );

        Ok(ProductionPlan {
            orders,
            client_summary,
            urgency_summary,
            machine_workload,
        })
    }
}
