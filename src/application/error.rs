use thiserror::Error;

use crate::application::api::ApiError;
use crate::config::LoadError;
use crate::infra::error::InfraError;
use crate::presentation::views::TemplateRenderError;

/// Failure of a list refresh. The container already shows the error message.
#[derive(Debug, Error)]
#[error("failed to load posts")]
pub struct FetchError {
    #[from]
    source: ApiError,
}

impl FetchError {
    pub fn api_error(&self) -> &ApiError {
        &self.source
    }
}

/// Failure of a submission. The user has already been alerted.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("server rejected the post with status {status}")]
    Rejected { status: u16 },
    #[error("failed to send the post")]
    Failed(#[source] ApiError),
}

impl SubmitError {
    /// Text of the blocking alert shown for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected { .. } => "Failed to create post. Please try again.",
            SubmitError::Failed(_) => "An error occurred while creating the post.",
        }
    }
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status } => SubmitError::Rejected { status },
            other => SubmitError::Failed(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
