//! Brand Insight Core
//!
//! Normalizes the free-form output of brand-voice and industry analyses
//! into typed records, holds the current analysis, and builds message
//! generation requests from its tone vector.

pub mod actors;
pub mod config;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod state;

#[cfg(test)]
mod tests;

pub use actors::supervisor::SupervisorHandle;
pub use config::BackendConfig;
pub use error::AppError;
pub use state::{AnalysisEvent, AnalysisState};
