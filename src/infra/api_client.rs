//! reqwest-backed [`PostsApi`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header::ACCEPT};

use crate::application::api::{ApiError, PostsApi};
use crate::domain::posts::{Post, PostCreateRequest};
use crate::infra::error::InfraError;

pub const POSTS_PATH: &str = "/api/posts";

#[derive(Clone, Debug)]
pub struct PostsClient {
    client: Client,
    base: Url,
}

impl PostsClient {
    pub fn new(base: Url) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(|err| InfraError::http(err.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("postboard/", env!("CARGO_PKG_VERSION"))
    }

    pub fn posts_url(&self) -> Result<Url, ApiError> {
        self.base.join(POSTS_PATH).map_err(ApiError::transport)
    }
}

#[async_trait]
impl PostsApi for PostsClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let resp = self
            .client
            .get(self.posts_url()?)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(ApiError::transport)?;
        serde_json::from_slice(&bytes).map_err(ApiError::decode)
    }

    async fn create_post(&self, request: &PostCreateRequest) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.posts_url()?)
            .json(request)
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
