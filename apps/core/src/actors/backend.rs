use crate::actors::traits::BrandBackend;
use crate::config::BackendConfig;
use crate::error::AppError;
use crate::models::{message_from_payload, AnalyzeRequest, AnalyzeResponse, RawAnalysis};
use crate::normalizer::MessageRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, instrument};

const ANALYZE_ENDPOINT: &str = "analyze/";
const GENERATE_MESSAGE_ENDPOINT: &str = "generate-message/";

/// HTTP client for the analysis backend.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct HttpBrandBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBrandBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        limit: Duration,
    ) -> Result<serde_json::Value, AppError> {
        let url = self.config.endpoint(endpoint)?;
        let request_future = self.client.post(url).json(body).send();

        let res = timeout(limit, request_future).await??;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Http(format!(
                "Request to {} failed with status {}: {}",
                endpoint, status, body
            )));
        }

        let json = timeout(limit, res.json::<serde_json::Value>()).await??;
        Ok(json)
    }
}

#[async_trait]
impl BrandBackend for HttpBrandBackend {
    #[instrument(skip(self))]
    async fn analyze(&self, url: String) -> Result<RawAnalysis, AppError> {
        info!("Requesting brand analysis");

        let body = AnalyzeRequest { url };
        let json = self
            .post_json(ANALYZE_ENDPOINT, &body, self.config.analyze_timeout())
            .await?;

        let response: AnalyzeResponse = serde_json::from_value(json)?;
        RawAnalysis::try_from(response)
    }

    #[instrument(skip(self, request), fields(tones = request.tone_values.len()))]
    async fn generate_message(&self, request: MessageRequest) -> Result<String, AppError> {
        info!("Requesting brand message");

        let json = self
            .post_json(
                GENERATE_MESSAGE_ENDPOINT,
                &request,
                self.config.message_timeout(),
            )
            .await?;

        message_from_payload(json)
    }
}
