use std::sync::Arc;

use chrono_tz::Tz;
use metrics::counter;
use tracing::{debug, error};

use crate::application::api::PostsApi;
use crate::application::error::FetchError;
use crate::application::page::{ContainerContent, PageSurface};
use crate::presentation::views::PostItemView;

/// Reads the full post collection and re-renders the container from scratch.
#[derive(Clone)]
pub struct PostLister {
    api: Arc<dyn PostsApi>,
    timezone: Tz,
}

impl PostLister {
    pub fn new(api: Arc<dyn PostsApi>, timezone: Tz) -> Self {
        Self { api, timezone }
    }

    /// Returns how many posts were rendered. On failure the container has
    /// already been replaced with the error message.
    pub async fn refresh<P>(&self, page: &mut P) -> Result<usize, FetchError>
    where
        P: PageSurface + ?Sized,
    {
        let posts = match self.api.list_posts().await {
            Ok(posts) => posts,
            Err(source) => {
                error!(
                    target = "postboard::lister",
                    error = %source,
                    "Error fetching posts"
                );
                counter!("postboard_posts_fetch_total", "outcome" => "error").increment(1);
                page.replace_posts(ContainerContent::Error);
                return Err(FetchError::from(source));
            }
        };

        if posts.is_empty() {
            counter!("postboard_posts_fetch_total", "outcome" => "empty").increment(1);
            page.replace_posts(ContainerContent::Placeholder);
            return Ok(0);
        }

        let items: Vec<PostItemView> = posts
            .iter()
            .map(|post| PostItemView::from_post(post, self.timezone))
            .collect();
        let count = items.len();
        debug!(target = "postboard::lister", count, "Rendering posts");
        counter!("postboard_posts_fetch_total", "outcome" => "ok").increment(1);
        page.replace_posts(ContainerContent::Posts(items));
        Ok(count)
    }
}
