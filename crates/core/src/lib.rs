pub mod config;
pub mod estimate;
pub mod line;
pub mod orders;
pub mod pipeline;
pub mod spreadsheet;
pub mod summary;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, ColumnMapping, Config, ConfigError,
    LineConfig, LogFormat, LoggingConfig, ServerConfig, UploadConfig,
};
pub use estimate::{
    estimate_fulfillment, format_fulfillment, FulfillmentEstimate, NewOrderData, NewOrderForm,
    ValidationError,
};
pub use line::{
    line_view, map_workload, map_workload_with, stage_load, FlowStep, FlowStepLoad, LoadLevel,
    Machine, MachineCapacityTable, MachineWorkload, ProductionLine, StageLoad, MACHINE_CAPACITIES,
    PRODUCTION_LINE,
};
pub use orders::{
    parse_minutes, prioritize, time_left_label, ExtractError, Order, OrderExtractor, MISSING,
    UNDEFINED_ID,
};
pub use pipeline::{
    LoadedPlan, PipelineError, PlanPipeline, PlanSnapshot, PlanState, PlanStore, ProductionPlan,
    UploadOutcome,
};
pub use spreadsheet::{
    ByteSource, CalamineDecoder, Cell, DecodeError, Grid, MemorySource, PathSource, ReadError,
    SpreadsheetDecoder, UnavailableDecoder,
};
pub use summary::{client_summary, urgency_summary, ClientSummary, UrgencyBucket, UrgencySummary};
pub use ticket::OrderTicket;
