use crate::actors::backend::HttpBrandBackend;
use crate::actors::messages::SupervisorMessage;
use crate::actors::traits::BrandBackend;
use crate::config::BackendConfig;
use crate::error::AppError;
use crate::models::AnalyzeRequest;
use crate::normalizer::{AnalysisAggregator, AnalysisResult, MessageRequestBuilder};
use crate::state::{AnalysisEvent, AnalysisState};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// Slack added on top of the backend timeouts before a caller gives up on the actor.
const RESPONSE_GRACE: Duration = Duration::from_secs(5);

/// A handle to the `SupervisorActor`.
///
/// This is the primary entry point for all business logic. The supervisor
/// owns the single current `AnalysisState`, runs analyses through the
/// backend and the normalizer, and drafts messages from the current tone
/// vector.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
    analyze_wait: Duration,
    message_wait: Duration,
}

impl SupervisorHandle {
    /// Creates a supervisor talking to the HTTP backend described by `config`.
    ///
    /// This spawns the actor in a new Tokio task.
    pub fn new(config: BackendConfig) -> Self {
        let analyze_wait = config.analyze_timeout() + RESPONSE_GRACE;
        let message_wait = config.message_timeout() + RESPONSE_GRACE;
        Self::with_backend(
            Arc::new(HttpBrandBackend::new(config)),
            analyze_wait,
            message_wait,
        )
    }

    /// Creates a supervisor around any backend implementation.
    ///
    /// # Arguments
    ///
    /// * `backend` - The analysis/generation backend.
    /// * `analyze_wait` - How long `analyze` waits for the actor's answer.
    /// * `message_wait` - How long `generate_message` waits for the actor's answer.
    pub fn with_backend<B: BrandBackend>(
        backend: Arc<B>,
        analyze_wait: Duration,
        message_wait: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let runner = SupervisorRunner::new(receiver, sender.downgrade(), backend);
        tokio::spawn(async move { runner.run().await });
        Self {
            sender,
            analyze_wait,
            message_wait,
        }
    }

    /// Analyzes a website and makes the result current.
    ///
    /// 1. Validates the URL.
    /// 2. Moves the state to `Analyzing`.
    /// 3. Fetches both raw analysis blobs from the backend.
    /// 4. Normalizes them into an `AnalysisResult`.
    /// 5. Replaces the current state with `Ready` (or `Failed`).
    ///
    /// # Returns
    ///
    /// The aggregated result, or the transport error that stopped the analysis.
    #[instrument(skip(self))]
    pub async fn analyze(&self, url: String) -> Result<Arc<AnalysisResult>, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::Analyze {
            url,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.analyze_wait, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// Drafts a brand message for `context` using the current tone vector.
    ///
    /// # Returns
    ///
    /// The backend's message, unchanged.
    #[instrument(skip(self))]
    pub async fn generate_message(&self, context: String) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::GenerateMessage {
            context,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.message_wait, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// Snapshot of the current analysis state.
    pub async fn state(&self) -> Result<AnalysisState, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SupervisorMessage::GetState { responder: send })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        recv.await.map_err(|e| AppError::Actor(e.to_string()))
    }

    /// The current analysis result, if one has completed.
    pub async fn current_result(&self) -> Result<Option<Arc<AnalysisResult>>, AppError> {
        Ok(self.state().await?.current_result())
    }

    /// Stops the supervisor. In-flight backend calls are not cancelled.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(SupervisorMessage::Shutdown)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))
    }
}

// --- Actor Runner ---
struct SupervisorRunner<B>
where
    B: BrandBackend,
{
    receiver: mpsc::Receiver<SupervisorMessage>,
    /// Used by spawned analysis tasks to report back to this loop.
    /// Weak so the loop still ends once every handle is dropped.
    self_sender: mpsc::WeakSender<SupervisorMessage>,
    backend: Arc<B>,
    aggregator: AnalysisAggregator,
    message_builder: MessageRequestBuilder,
    state: AnalysisState,
}

impl<B> SupervisorRunner<B>
where
    B: BrandBackend,
{
    fn new(
        receiver: mpsc::Receiver<SupervisorMessage>,
        self_sender: mpsc::WeakSender<SupervisorMessage>,
        backend: Arc<B>,
    ) -> Self {
        Self {
            receiver,
            self_sender,
            backend,
            aggregator: AnalysisAggregator::new(),
            message_builder: MessageRequestBuilder::new(),
            state: AnalysisState::Idle,
        }
    }

    async fn run(mut self) {
        info!("Supervisor started");
        while let Some(msg) = self.receiver.recv().await {
            if matches!(msg, SupervisorMessage::Shutdown) {
                info!("Supervisor shutting down...");
                break;
            }
            self.handle_message(msg);
        }
        info!("Supervisor stopped");
    }

    fn handle_message(&mut self, msg: SupervisorMessage) {
        match msg {
            SupervisorMessage::Analyze { url, responder } => {
                self.start_analysis(url, responder);
            }
            SupervisorMessage::AnalysisFinished {
                request_id,
                result,
                responder,
            } => {
                self.finish_analysis(request_id, result, responder);
            }
            SupervisorMessage::GenerateMessage { context, responder } => {
                self.start_message(context, responder);
            }
            SupervisorMessage::GetState { responder } => {
                let _ = responder.send(self.state.clone());
            }
            SupervisorMessage::Shutdown => {}
        }
    }

    fn transition(&mut self, event: AnalysisEvent) {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.apply(event);
        info!("Analysis state is now {}", self.state.label());
    }

    #[instrument(skip(self, responder))]
    fn start_analysis(
        &mut self,
        url: String,
        responder: oneshot::Sender<Result<Arc<AnalysisResult>, AppError>>,
    ) {
        let request = AnalyzeRequest { url };
        if let Err(e) = request.validate() {
            warn!("Rejecting analysis request: {}", e);
            let _ = responder.send(Err(AppError::from(e)));
            return;
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, "Starting analysis of {}", request.url);
        self.transition(AnalysisEvent::Started);

        // Backend calls are slow; run them off the actor loop so state
        // queries and other requests are still served meanwhile.
        let backend = self.backend.clone();
        let aggregator = self.aggregator;
        let self_sender = self.self_sender.clone();
        tokio::spawn(async move {
            let result = backend.analyze(request.url).await.map(|raw| {
                let (result, report) =
                    aggregator.aggregate_with_report(&raw.brand_voice, &raw.industry);
                info!(
                    %request_id,
                    brand_voice = %report.brand_voice,
                    industry = %report.industry,
                    "Analysis normalized"
                );
                Arc::new(result)
            });

            let msg = SupervisorMessage::AnalysisFinished {
                request_id,
                result,
                responder,
            };
            match self_sender.upgrade() {
                Some(sender) => {
                    if let Err(e) = sender.send(msg).await {
                        error!(%request_id, "Supervisor gone before analysis finished: {}", e);
                    }
                }
                None => warn!(%request_id, "Supervisor gone before analysis finished"),
            }
        });
    }

    fn finish_analysis(
        &mut self,
        request_id: Uuid,
        result: Result<Arc<AnalysisResult>, AppError>,
        responder: oneshot::Sender<Result<Arc<AnalysisResult>, AppError>>,
    ) {
        match &result {
            Ok(analysis) => {
                info!(%request_id, "Analysis completed: {}", analysis.summary());
                self.transition(AnalysisEvent::Completed(analysis.clone()));
            }
            Err(e) => {
                error!(%request_id, "Analysis failed: {}", e);
                self.transition(AnalysisEvent::Failed(e.to_string()));
            }
        }
        let _ = responder.send(result);
    }

    #[instrument(skip(self, responder))]
    fn start_message(&mut self, context: String, responder: oneshot::Sender<Result<String, AppError>>) {
        if context.trim().is_empty() {
            let _ = responder.send(Err(AppError::Validation(
                "Message context must not be empty".to_string(),
            )));
            return;
        }

        let Some(analysis) = self.state.current_result() else {
            let _ = responder.send(Err(AppError::NoAnalysis));
            return;
        };

        let request = self.message_builder.build(context, analysis.tone_vector());
        info!("Generating message with {} tone values", request.tone_values.len());

        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend.generate_message(request).await;
            if let Err(e) = &result {
                error!("Message generation failed: {}", e);
            }
            let _ = responder.send(result);
        });
    }
}
