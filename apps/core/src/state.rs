//! Analysis state machine.
//!
//! The current analysis is never mutated in place: every external event
//! produces a new `AnalysisState` through [`AnalysisState::apply`]. A result
//! becomes visible only once its aggregation has completed, and the last
//! analysis to complete wins.

use serde::Serialize;
use std::sync::Arc;

use crate::normalizer::AnalysisResult;

/// Events that move the analysis state forward
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    /// An analysis request was sent to the backend
    Started,
    /// An analysis finished and was aggregated
    Completed(Arc<AnalysisResult>),
    /// An analysis failed at the transport level
    Failed(String),
}

/// State of the single current analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// At least one analysis is in flight; the last held result stays usable
    Analyzing {
        in_flight: usize,
        previous: Option<Arc<AnalysisResult>>,
    },
    /// The latest completed analysis
    Ready(Arc<AnalysisResult>),
    /// The latest analysis failed; an older result may still be held
    Failed {
        reason: String,
        previous: Option<Arc<AnalysisResult>>,
    },
}

impl AnalysisState {
    /// Produce the state that follows `event`
    pub fn apply(self, event: AnalysisEvent) -> AnalysisState {
        match event {
            AnalysisEvent::Started => match self {
                AnalysisState::Analyzing {
                    in_flight,
                    previous,
                } => AnalysisState::Analyzing {
                    in_flight: in_flight + 1,
                    previous,
                },
                other => AnalysisState::Analyzing {
                    in_flight: 1,
                    previous: other.current_result(),
                },
            },
            AnalysisEvent::Completed(result) => match self {
                AnalysisState::Analyzing { in_flight, .. } if in_flight > 1 => {
                    AnalysisState::Analyzing {
                        in_flight: in_flight - 1,
                        previous: Some(result),
                    }
                }
                _ => AnalysisState::Ready(result),
            },
            AnalysisEvent::Failed(reason) => match self {
                AnalysisState::Analyzing {
                    in_flight,
                    previous,
                } if in_flight > 1 => AnalysisState::Analyzing {
                    in_flight: in_flight - 1,
                    previous,
                },
                other => AnalysisState::Failed {
                    reason,
                    previous: other.current_result(),
                },
            },
        }
    }

    /// The most recent completed result, if any
    pub fn current_result(&self) -> Option<Arc<AnalysisResult>> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::Analyzing { previous, .. } | AnalysisState::Failed { previous, .. } => {
                previous.clone()
            }
            AnalysisState::Ready(result) => Some(result.clone()),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing { .. })
    }

    /// Failure reason of the latest analysis, if it failed
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Analyzing { .. } => "analyzing",
            AnalysisState::Ready(_) => "ready",
            AnalysisState::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::AnalysisAggregator;

    fn result(tone: &str) -> Arc<AnalysisResult> {
        Arc::new(AnalysisAggregator::new().aggregate(&format!("tone_scale:\n- {}", tone), "{}"))
    }

    #[test]
    fn test_happy_path() {
        let state = AnalysisState::Idle.apply(AnalysisEvent::Started);
        assert!(state.is_analyzing());
        assert!(state.current_result().is_none());

        let state = state.apply(AnalysisEvent::Completed(result("Warm")));
        assert_eq!(state.label(), "ready");
        assert_eq!(state.current_result().unwrap().tone_vector(), ["Warm"]);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let state = AnalysisState::Ready(result("Warm"))
            .apply(AnalysisEvent::Started)
            .apply(AnalysisEvent::Failed("HTTP error: connection refused".to_string()));

        assert_eq!(state.error(), Some("HTTP error: connection refused"));
        assert_eq!(state.current_result().unwrap().tone_vector(), ["Warm"]);
    }

    #[test]
    fn test_last_completion_wins() {
        let state = AnalysisState::Idle
            .apply(AnalysisEvent::Started)
            .apply(AnalysisEvent::Started);

        let state = state.apply(AnalysisEvent::Completed(result("Bold")));
        assert!(state.is_analyzing());
        assert_eq!(state.current_result().unwrap().tone_vector(), ["Bold"]);

        let state = state.apply(AnalysisEvent::Completed(result("Calm")));
        assert_eq!(state.label(), "ready");
        assert_eq!(state.current_result().unwrap().tone_vector(), ["Calm"]);
    }
}
