//! Profile types - Output structures of the normalizer.
//!
//! Plain data produced from the two raw analysis blobs, plus the
//! `AnalysisResult` aggregate that downstream consumers hold on to.

use serde::{Deserialize, Serialize};

/// Fallback value for a missing or unreadable `industry_type`.
pub const DEFAULT_INDUSTRY_TYPE: &str = "Unknown";

/// Fallback value for a missing or unreadable `justification`.
pub const DEFAULT_JUSTIFICATION: &str = "No justification provided";

/// Brand-voice profile parsed from the YAML-like analysis block.
///
/// Every section is always present. A section that is missing from the
/// source text, or that could not be read, is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandVoiceProfile {
    /// Tone descriptors in source order (e.g. "Confident: 8/10")
    pub tone_scale: Vec<String>,
    /// Personality traits in source order
    pub personality_traits: Vec<String>,
    /// Messaging themes; an item may be merged from several source lines
    pub messaging_themes: Vec<String>,
    /// Communication guidelines; same merge rule as themes
    pub communication_guidelines: Vec<String>,
}

impl BrandVoiceProfile {
    /// True when no section produced any item
    pub fn is_empty(&self) -> bool {
        self.tone_scale.is_empty()
            && self.personality_traits.is_empty()
            && self.messaging_themes.is_empty()
            && self.communication_guidelines.is_empty()
    }
}

/// Industry classification parsed from the JSON-like analysis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryClassification {
    pub industry_type: String,
    pub justification: String,
}

impl Default for IndustryClassification {
    fn default() -> Self {
        Self {
            industry_type: DEFAULT_INDUSTRY_TYPE.to_string(),
            justification: DEFAULT_JUSTIFICATION.to_string(),
        }
    }
}

/// Complete, immutable result of one analysis.
///
/// Only the aggregator can build one; consumers get read access through
/// the accessors. The raw blobs are kept verbatim for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    brand_voice: BrandVoiceProfile,
    industry: IndustryClassification,
    brand_voice_raw: String,
    industry_raw: String,
    tone_vector: Vec<String>,
}

impl AnalysisResult {
    pub(crate) fn new(
        brand_voice: BrandVoiceProfile,
        industry: IndustryClassification,
        brand_voice_raw: String,
        industry_raw: String,
        tone_vector: Vec<String>,
    ) -> Self {
        Self {
            brand_voice,
            industry,
            brand_voice_raw,
            industry_raw,
            tone_vector,
        }
    }

    pub fn brand_voice(&self) -> &BrandVoiceProfile {
        &self.brand_voice
    }

    pub fn industry(&self) -> &IndustryClassification {
        &self.industry
    }

    pub fn brand_voice_raw(&self) -> &str {
        &self.brand_voice_raw
    }

    pub fn industry_raw(&self) -> &str {
        &self.industry_raw
    }

    /// Tone values carried forward into message generation requests
    pub fn tone_vector(&self) -> &[String] {
        &self.tone_vector
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Industry: {}, Tones: {}, Traits: {}, Themes: {}, Guidelines: {}",
            self.industry.industry_type,
            self.brand_voice.tone_scale.len(),
            self.brand_voice.personality_traits.len(),
            self.brand_voice.messaging_themes.len(),
            self.brand_voice.communication_guidelines.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_defaults() {
        let industry = IndustryClassification::default();

        assert_eq!(industry.industry_type, "Unknown");
        assert_eq!(industry.justification, "No justification provided");
    }

    #[test]
    fn test_empty_profile() {
        let profile = BrandVoiceProfile::default();
        assert!(profile.is_empty());

        let profile = BrandVoiceProfile {
            personality_traits: vec!["Bold".to_string()],
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_result_serializes_all_fields() {
        let result = AnalysisResult::new(
            BrandVoiceProfile::default(),
            IndustryClassification::default(),
            "raw voice".to_string(),
            "raw industry".to_string(),
            vec![],
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["brand_voice"]["tone_scale"], serde_json::json!([]));
        assert_eq!(json["industry"]["industry_type"], "Unknown");
        assert_eq!(json["brand_voice_raw"], "raw voice");
        assert_eq!(json["industry_raw"], "raw industry");
        assert_eq!(json["tone_vector"], serde_json::json!([]));
    }

    #[test]
    fn test_summary() {
        let result = AnalysisResult::new(
            BrandVoiceProfile {
                tone_scale: vec!["Warm".to_string()],
                ..Default::default()
            },
            IndustryClassification::default(),
            String::new(),
            String::new(),
            vec!["Warm".to_string()],
        );

        let summary = result.summary();
        assert!(summary.contains("Industry: Unknown"));
        assert!(summary.contains("Tones: 1"));
    }
}
