//! Message generation requests.

use serde::{Deserialize, Serialize};

/// Request body for the message generation backend.
///
/// The builder copies its inputs as-is; callers validate the context
/// (non-empty) before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Free-text context supplied by the user
    pub context: String,
    /// Tone vector of the analysis current at request time
    pub tone_values: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MessageRequestBuilder;

impl MessageRequestBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, context: impl Into<String>, tone_vector: &[String]) -> MessageRequest {
        MessageRequest {
            context: context.into(),
            tone_values: tone_vector.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_copies_inputs() {
        let tones = vec!["Confident".to_string(), "Warm".to_string()];

        let request = MessageRequestBuilder::new().build("product launch", &tones);

        assert_eq!(request.context, "product launch");
        assert_eq!(request.tone_values, tones);
    }

    #[test]
    fn test_wire_format() {
        let request = MessageRequestBuilder::new().build("sale", &["Playful".to_string()]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"context": "sale", "tone_values": ["Playful"]})
        );
    }

    #[test]
    fn test_builder_does_not_validate() {
        let request = MessageRequestBuilder::new().build("", &[]);

        assert_eq!(request.context, "");
        assert!(request.tone_values.is_empty());
    }
}
