//! Device inventory: traversal, enrichment and the flat export row

pub mod pipeline;
pub mod record;
pub mod resolver;

pub use pipeline::{InventoryPipeline, PipelineState};
pub use record::ExportRecord;
pub use resolver::{format_address, EnrichmentResolver, WorkspaceEnrichment};
