use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// Body of an analysis request.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AnalyzeRequest {
    /// The website to analyze.
    #[validate(url)]
    pub url: String,
}

/// Raw output of one analysis task.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskOutput {
    /// Untouched text produced by the task.
    #[serde(default)]
    pub raw: String,
}

/// Body returned by the analysis endpoint.
///
/// Either `error` is set, or `tasks_output` holds the brand voice task
/// first and the industry classification task second.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub tasks_output: Vec<TaskOutput>,
}

/// The two raw text blobs of one analysis, identified by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnalysis {
    pub brand_voice: String,
    pub industry: String,
}

impl TryFrom<AnalyzeResponse> for RawAnalysis {
    type Error = AppError;

    fn try_from(response: AnalyzeResponse) -> Result<Self, Self::Error> {
        if let Some(error) = response.error {
            return Err(AppError::Backend(error));
        }

        let mut outputs = response.tasks_output.into_iter();
        match (outputs.next(), outputs.next()) {
            (Some(brand_voice), Some(industry)) => Ok(RawAnalysis {
                brand_voice: brand_voice.raw,
                industry: industry.raw,
            }),
            _ => Err(AppError::Backend(
                "Analysis response is missing task output".to_string(),
            )),
        }
    }
}

/// Read the generated message out of a message endpoint body.
///
/// `{"error": ...}` is a backend error, `{"message": ...}` is the message.
/// Anything else is a bare payload and is used in place of the message:
/// a JSON string as-is, any other value as its compact JSON text.
pub fn message_from_payload(payload: Value) -> Result<String, AppError> {
    if let Some(error) = payload.get("error").and_then(Value::as_str) {
        return Err(AppError::Backend(error.to_string()));
    }

    match payload {
        Value::Object(mut map) if map.contains_key("message") => match map.remove("message") {
            Some(Value::String(message)) => Ok(message),
            Some(other) => Ok(other.to_string()),
            None => Ok(String::new()),
        },
        Value::String(message) => Ok(message),
        other => Ok(other.to_string()),
    }
}
