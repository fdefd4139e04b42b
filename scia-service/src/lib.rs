//! HTTP front end and SCIA Engineer runner for the pile foundation model

pub mod analysis;
pub mod api;
pub mod config;
pub mod executor;
pub mod models;

pub use analysis::{run_analysis, AnalysisError};
pub use api::create_router;
pub use config::ServiceConfig;
pub use executor::{AnalysisEngine, AnalysisInput, ExecutorError, SciaExecutor};
