//! The posts API seam the lister and submitter talk to.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::{Post, PostCreateRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

/// `GET /api/posts` and `POST /api/posts`.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the full collection. Only a 200 with a JSON array succeeds.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Create a post. Any 2xx succeeds; the response body is ignored.
    async fn create_post(&self, request: &PostCreateRequest) -> Result<(), ApiError>;
}
