//! Recomputing analysis over the loaded tables

mod analysis;
mod config;
mod tables;

pub use analysis::{AnalysisSession, NO_MOVE, Snapshot};
pub use config::EngineConfig;
pub use tables::Tables;
