//! Normalizer Tests
//!
//! Behavioural tests for the brand-voice parser, the industry parser, tone
//! extraction, aggregation and message request building.

use crate::normalizer::{
    AnalysisAggregator, BrandVoiceProfile, IndustryClassification, MessageRequestBuilder,
    ParseSource, SectionedTextParser, StructuredTextParser, ToneVectorExtractor,
};

/// Typical brand-voice output, including a fenced block and multi-line items
const FULL_BRAND_VOICE: &str = r#"```yaml
tone_scale:
  - Confident: 8/10
  - Warm: 7/10
  - Playful: 4/10
personality_traits:
  - Bold
  - Approachable
messaging_themes:
  - Sustainability:
    Responsibly sourced materials
  - Community
communication_guidelines:
  - Dos:
    Speak directly to the customer,
    celebrate small wins
  - Avoid jargon
```"#;

#[cfg(test)]
mod sectioned_parser_tests {
    use super::*;

    #[test]
    fn test_full_block() {
        let profile = SectionedTextParser::new().parse(FULL_BRAND_VOICE);

        assert_eq!(
            profile.tone_scale,
            vec!["Confident: 8/10", "Warm: 7/10", "Playful: 4/10"]
        );
        assert_eq!(profile.personality_traits, vec!["Bold", "Approachable"]);
        assert_eq!(
            profile.messaging_themes,
            vec!["Sustainability: Responsibly sourced materials", "Community"]
        );
        assert_eq!(
            profile.communication_guidelines,
            vec![
                "Dos: Speak directly to the customer, celebrate small wins",
                "Avoid jargon"
            ]
        );
    }

    #[test]
    fn test_tone_items_are_trimmed_and_ordered() {
        let text = "tone_scale:\n   -    Confident   \n\t- Warm\n- Confident";

        let profile = SectionedTextParser::new().parse(text);

        assert_eq!(profile.tone_scale, vec!["Confident", "Warm", "Confident"]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let inputs = vec![
            "",
            "Here is the brand voice analysis you asked for.",
            "personality_traits:\n- Bold",
            "tone_scale:\npersonality_traits:\nmessaging_themes:\ncommunication_guidelines:",
        ];

        for input in inputs {
            let profile = SectionedTextParser::new().parse(input);
            assert!(
                profile.tone_scale.is_empty(),
                "Expected empty tone_scale for {:?}",
                input
            );
            assert!(profile.messaging_themes.is_empty());
            assert!(profile.communication_guidelines.is_empty());
        }
    }

    #[test]
    fn test_list_lines_before_any_header_are_ignored() {
        let text = "- Stray item\ntone_scale:\n- Warm";

        let profile = SectionedTextParser::new().parse(text);

        assert_eq!(profile.tone_scale, vec!["Warm"]);
        assert!(profile.personality_traits.is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let text = "tone_scale:\r\n- Confident\r\n- Warm\r\npersonality_traits:\r\n- Bold\r\n";

        let profile = SectionedTextParser::new().parse(text);

        assert_eq!(profile.tone_scale, vec!["Confident", "Warm"]);
        assert_eq!(profile.personality_traits, vec!["Bold"]);
    }

    #[test]
    fn test_continuation_with_colon_is_not_joined() {
        // A continuation containing a colon is dropped and the pending item flushed as-is.
        let text = "communication_guidelines:\n- Donts:\n  Avoid: slang\n- Be kind";

        let profile = SectionedTextParser::new().parse(text);

        assert_eq!(profile.communication_guidelines, vec!["Donts:", "Be kind"]);
    }

    #[test]
    fn test_tone_items_ending_with_colon_are_kept() {
        let text = "tone_scale:\n- Confident:\n  very";

        let profile = SectionedTextParser::new().parse(text);

        assert_eq!(profile.tone_scale, vec!["Confident:"]);
    }

    #[test]
    fn test_outcome_source() {
        let parser = SectionedTextParser::new();

        assert_eq!(
            parser.parse_with_outcome(FULL_BRAND_VOICE).source(),
            ParseSource::Parsed
        );
        assert_eq!(
            parser.parse_with_outcome("nothing useful").source(),
            ParseSource::Defaulted
        );
    }

    #[test]
    fn test_idempotent() {
        let parser = SectionedTextParser::new();

        assert_eq!(parser.parse(FULL_BRAND_VOICE), parser.parse(FULL_BRAND_VOICE));
    }
}

#[cfg(test)]
mod structured_parser_tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        let pairs = vec![
            ("SaaS", "Subscription software"),
            ("D2C", "Sells directly: no retailers"),
            ("", ""),
        ];

        for (industry_type, justification) in pairs {
            let text = serde_json::json!({
                "industry_type": industry_type,
                "justification": justification,
            })
            .to_string();

            let industry = StructuredTextParser::new().parse(&text);
            assert_eq!(industry.industry_type, industry_type);
            assert_eq!(industry.justification, justification);
        }
    }

    #[test]
    fn test_fallback_industry_only() {
        let text = r#"Result: {"industry_type": "Marketplace", oops"#;

        let outcome = StructuredTextParser::new().parse_with_outcome(text);

        assert_eq!(outcome.source(), ParseSource::FallbackExtracted);
        let industry = outcome.into_value();
        assert_eq!(industry.industry_type, "Marketplace");
        assert_eq!(industry.justification, "No justification provided");
    }

    #[test]
    fn test_fallback_justification_only() {
        let text = r#"industry unclear, "justification": "Mixed signals" }"#;

        let industry = StructuredTextParser::new().parse(text);

        assert_eq!(industry.industry_type, "Unknown");
        assert_eq!(industry.justification, "Mixed signals");
    }

    #[test]
    fn test_unparseable_text_defaults() {
        let industry = StructuredTextParser::new().parse("industry_type: SaaS (not JSON)");

        assert_eq!(industry, IndustryClassification::default());
    }

    #[test]
    fn test_non_string_field_uses_default() {
        let industry =
            StructuredTextParser::new().parse(r#"{"industry_type": 42, "justification": null}"#);

        assert_eq!(industry.industry_type, "Unknown");
        assert_eq!(industry.justification, "No justification provided");
    }

    #[test]
    fn test_idempotent() {
        let parser = StructuredTextParser::new();
        let text = r#"```json {"industry_type": "B2B"} ```"#;

        assert_eq!(parser.parse(text), parser.parse(text));
    }
}

#[cfg(test)]
mod tone_and_message_tests {
    use super::*;

    #[test]
    fn test_tone_vector_matches_tone_scale() {
        let profile = SectionedTextParser::new().parse(FULL_BRAND_VOICE);

        let tones = ToneVectorExtractor::new().extract(&profile);

        assert_eq!(tones, profile.tone_scale);
    }

    #[test]
    fn test_message_request_from_analysis() {
        let analysis = AnalysisAggregator::new().aggregate(
            "tone_scale:\n- Confident\n- Warm",
            r#"{"industry_type": "SaaS"}"#,
        );

        let request = MessageRequestBuilder::new().build("product launch", analysis.tone_vector());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "context": "product launch",
                "tone_values": ["Confident", "Warm"]
            })
        );
    }
}

#[cfg(test)]
mod end_to_end_scenarios {
    use super::*;

    #[test]
    fn scenario_a_brand_voice_sections() {
        let profile = SectionedTextParser::new()
            .parse("tone_scale:\n- Confident\n- Warm\npersonality_traits:\n- Bold");

        assert_eq!(
            profile,
            BrandVoiceProfile {
                tone_scale: vec!["Confident".to_string(), "Warm".to_string()],
                personality_traits: vec!["Bold".to_string()],
                messaging_themes: vec![],
                communication_guidelines: vec![],
            }
        );
    }

    #[test]
    fn scenario_b_industry_json() {
        let industry = StructuredTextParser::new()
            .parse(r#"{"industry_type": "SaaS", "justification": "Subscription software"}"#);

        assert_eq!(industry.industry_type, "SaaS");
        assert_eq!(industry.justification, "Subscription software");
    }

    #[test]
    fn scenario_c_industry_not_json() {
        let industry = StructuredTextParser::new().parse("industry_type: SaaS (not JSON)");

        assert_eq!(industry.industry_type, "Unknown");
        assert_eq!(industry.justification, "No justification provided");
    }

    #[test]
    fn scenario_d_message_request() {
        let tone_vector = vec!["Confident".to_string(), "Warm".to_string()];

        let request = MessageRequestBuilder::new().build("product launch", &tone_vector);

        assert_eq!(request.context, "product launch");
        assert_eq!(request.tone_values, vec!["Confident", "Warm"]);
    }

    #[test]
    fn full_aggregation_keeps_raw_text() {
        let industry_raw = "```json\n{\"industry_type\": \"D2C\", \"justification\": \"Own storefront\"}\n```";

        let (result, report) =
            AnalysisAggregator::new().aggregate_with_report(FULL_BRAND_VOICE, industry_raw);

        assert_eq!(report.brand_voice, ParseSource::Parsed);
        assert_eq!(report.industry, ParseSource::FallbackExtracted);
        assert_eq!(result.brand_voice_raw(), FULL_BRAND_VOICE);
        assert_eq!(result.industry_raw(), industry_raw);
        assert_eq!(result.industry().industry_type, "D2C");
        assert_eq!(result.tone_vector(), result.brand_voice().tone_scale.as_slice());
    }
}
