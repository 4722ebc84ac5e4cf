//! Scripted `PostsApi` used by the application-layer tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::api::{ApiError, PostsApi};
use crate::domain::posts::{Post, PostCreateRequest};

#[derive(Default)]
pub(crate) struct StubPostsApi {
    lists: Mutex<VecDeque<Result<Vec<Post>, ApiError>>>,
    creates: Mutex<VecDeque<Result<(), ApiError>>>,
    created: Mutex<Vec<PostCreateRequest>>,
    list_calls: Mutex<usize>,
}

impl StubPostsApi {
    pub(crate) fn with_list(self, response: Result<Vec<Post>, ApiError>) -> Self {
        self.lists.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_create(self, response: Result<(), ApiError>) -> Self {
        self.creates.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub(crate) fn created(&self) -> Vec<PostCreateRequest> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostsApi for StubPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        *self.list_calls.lock().unwrap() += 1;
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected list_posts call")
    }

    async fn create_post(&self, request: &PostCreateRequest) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(request.clone());
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected create_post call")
    }
}

pub(crate) fn sample_post(title: &str, content: &str, created_at: &str) -> Post {
    Post {
        id: None,
        title: title.into(),
        content: content.into(),
        created_at: Some(created_at.into()),
    }
}
