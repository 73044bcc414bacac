//! Analysis aggregator - Main orchestrator for the normalizer.
//!
//! Runs both parsers on their raw blobs, derives the tone vector and packs
//! everything into one immutable `AnalysisResult`. This is the only place
//! a new result comes into existence.

use serde::Serialize;
use tracing::{debug, info};

use super::outcome::ParseSource;
use super::profile::AnalysisResult;
use super::sections::SectionedTextParser;
use super::structured::StructuredTextParser;
use super::tone::ToneVectorExtractor;

/// Which parse path each half of an analysis went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    pub brand_voice: ParseSource,
    pub industry: ParseSource,
}

impl AggregationReport {
    /// True when both blobs were read by their primary parser
    pub fn is_clean(&self) -> bool {
        self.brand_voice == ParseSource::Parsed && self.industry == ParseSource::Parsed
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisAggregator {
    sectioned_parser: SectionedTextParser,
    structured_parser: StructuredTextParser,
    tone_extractor: ToneVectorExtractor,
}

impl AnalysisAggregator {
    pub fn new() -> Self {
        Self {
            sectioned_parser: SectionedTextParser::new(),
            structured_parser: StructuredTextParser::new(),
            tone_extractor: ToneVectorExtractor::new(),
        }
    }

    /// Build an analysis result from the two raw blobs
    pub fn aggregate(&self, brand_voice_raw: &str, industry_raw: &str) -> AnalysisResult {
        self.aggregate_with_report(brand_voice_raw, industry_raw).0
    }

    /// Build an analysis result and report the parse path taken for each blob
    pub fn aggregate_with_report(
        &self,
        brand_voice_raw: &str,
        industry_raw: &str,
    ) -> (AnalysisResult, AggregationReport) {
        // 1. Brand voice sections
        let brand_voice_outcome = self.sectioned_parser.parse_with_outcome(brand_voice_raw);

        // 2. Industry classification
        let industry_outcome = self.structured_parser.parse_with_outcome(industry_raw);

        let report = AggregationReport {
            brand_voice: brand_voice_outcome.source(),
            industry: industry_outcome.source(),
        };

        let brand_voice = brand_voice_outcome.into_value();
        let industry = industry_outcome.into_value();

        // 3. Tone vector (needs the parsed profile)
        let tone_vector = self.tone_extractor.extract(&brand_voice);

        let result = AnalysisResult::new(
            brand_voice,
            industry,
            brand_voice_raw.to_string(),
            industry_raw.to_string(),
            tone_vector,
        );

        if report.is_clean() {
            debug!("Aggregated analysis: {}", result.summary());
        } else {
            info!(
                "Aggregated analysis with degraded input (brand_voice: {}, industry: {}): {}",
                report.brand_voice,
                report.industry,
                result.summary()
            );
        }

        (result, report)
    }
}
