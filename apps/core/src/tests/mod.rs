//! Test Module
//!
//! Test suite for the Brand Insight core.
//!
//! ## Test Categories
//! - `normalizer_tests`: brand-voice and industry parsing, tone extraction, aggregation
//! - `backend_tests`: HTTP backend against a mock analysis service
//! - `integration_tests`: supervisor workflows end to end

pub mod normalizer_tests;
