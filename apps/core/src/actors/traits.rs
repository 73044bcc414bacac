use crate::error::AppError;
use crate::models::RawAnalysis;
use crate::normalizer::MessageRequest;
use async_trait::async_trait;

/// Defines the public interface of the analysis backend.
///
/// The backend is a black box that scrapes a website and runs the two
/// analysis tasks, and separately drafts a brand message. This trait allows
/// the HTTP implementation to be swapped for mocks in tests.
#[async_trait]
pub trait BrandBackend: Send + Sync + 'static {
    /// Runs both analysis tasks for `url` and returns their raw text.
    async fn analyze(&self, url: String) -> Result<RawAnalysis, AppError>;

    /// Generates a brand message for the request and returns it unchanged.
    async fn generate_message(&self, request: MessageRequest) -> Result<String, AppError>;
}
