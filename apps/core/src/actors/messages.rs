use std::sync::Arc;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::AppError;
use crate::normalizer::AnalysisResult;
use crate::state::AnalysisState;

/// Messages that can be sent to the `SupervisorActor`.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// A request to analyze a website and make the result current.
    Analyze {
        url: String,
        /// A channel to send the aggregated result back.
        responder: oneshot::Sender<Result<Arc<AnalysisResult>, AppError>>,
    },
    /// Internal: an analysis task finished (successfully or not).
    AnalysisFinished {
        request_id: Uuid,
        result: Result<Arc<AnalysisResult>, AppError>,
        responder: oneshot::Sender<Result<Arc<AnalysisResult>, AppError>>,
    },
    /// A request to draft a message using the current tone vector.
    GenerateMessage {
        context: String,
        /// A channel to send the generated message back.
        responder: oneshot::Sender<Result<String, AppError>>,
    },
    /// A request for a snapshot of the current analysis state.
    GetState {
        responder: oneshot::Sender<AnalysisState>,
    },
    /// A command to stop the supervisor loop.
    Shutdown,
}
