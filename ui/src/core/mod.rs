//! Platform-agnostic logic: dataset ingestion, the derived-metrics pipeline,
//! geography loading and the async loader seams used by the views.

pub mod color;
pub mod config;
pub mod dataset;
pub mod format;
pub mod geo;
pub mod hover;
pub mod loader;
pub mod pipeline;
pub mod ranking;
pub mod rate;
pub mod timing;
