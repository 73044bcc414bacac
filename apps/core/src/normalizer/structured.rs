//! Structured text parsing for the industry classification block.
//!
//! Strict JSON first. Generated text often wraps the object in prose or
//! code fences, so when the strict parse fails each field is recovered
//! independently with a quoted-pair regex.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::outcome::ParseOutcome;
use super::profile::{IndustryClassification, DEFAULT_INDUSTRY_TYPE, DEFAULT_JUSTIFICATION};

const INDUSTRY_TYPE_KEY: &str = "industry_type";
const JUSTIFICATION_KEY: &str = "justification";

// NOTE: expect() is acceptable here, the patterns are constant.
static INDUSTRY_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""industry_type"\s*:\s*"([^"]*)""#).expect("Invalid regex: industry_type pattern")
});

static JUSTIFICATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""justification"\s*:\s*"([^"]*)""#).expect("Invalid regex: justification pattern")
});

/// Parser for the JSON-like industry classification block
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredTextParser;

impl StructuredTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an industry block. Never fails; missing fields take their defaults.
    pub fn parse(&self, text: &str) -> IndustryClassification {
        self.parse_with_outcome(text).into_value()
    }

    /// Parse and report which path produced the classification.
    pub fn parse_with_outcome(&self, text: &str) -> ParseOutcome<IndustryClassification> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => {
                debug!("Industry block parsed as JSON");
                ParseOutcome::Parsed(IndustryClassification {
                    industry_type: string_field(&map, INDUSTRY_TYPE_KEY, DEFAULT_INDUSTRY_TYPE),
                    justification: string_field(&map, JUSTIFICATION_KEY, DEFAULT_JUSTIFICATION),
                })
            }
            Ok(other) => {
                warn!("Industry block is JSON but not an object ({}), using pattern fallback", json_kind(&other));
                self.extract_fallback(text)
            }
            Err(e) => {
                warn!("Industry block is not valid JSON ({}), using pattern fallback", e);
                self.extract_fallback(text)
            }
        }
    }

    fn extract_fallback(&self, text: &str) -> ParseOutcome<IndustryClassification> {
        let industry_type = capture(&INDUSTRY_TYPE_PATTERN, text);
        let justification = capture(&JUSTIFICATION_PATTERN, text);

        if industry_type.is_none() && justification.is_none() {
            debug!("No industry field recovered by pattern");
            return ParseOutcome::Defaulted;
        }

        ParseOutcome::FallbackExtracted(IndustryClassification {
            industry_type: industry_type.unwrap_or_else(|| DEFAULT_INDUSTRY_TYPE.to_string()),
            justification: justification.unwrap_or_else(|| DEFAULT_JUSTIFICATION.to_string()),
        })
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
