//! # Normalizer Module
//!
//! Turns the free-form text of the two analysis tasks into typed data.
//! Pure and synchronous: no I/O, no shared state, every function total.
//!
//! ## Components
//! - `sections`: brand-voice block parser (YAML-like, line based)
//! - `structured`: industry block parser (JSON with regex fallback)
//! - `tone`: tone vector extraction
//! - `aggregator`: builds the immutable `AnalysisResult`
//! - `message`: message generation request builder
//! - `outcome`: tagged parse results
//! - `profile`: output data structures

pub mod aggregator;
pub mod message;
pub mod outcome;
pub mod profile;
pub mod sections;
pub mod structured;
pub mod tone;

pub use aggregator::{AggregationReport, AnalysisAggregator};
pub use message::{MessageRequest, MessageRequestBuilder};
pub use outcome::{ParseOutcome, ParseSource};
pub use profile::{AnalysisResult, BrandVoiceProfile, IndustryClassification};
pub use sections::{Section, SectionedTextParser};
pub use structured::StructuredTextParser;
pub use tone::ToneVectorExtractor;
