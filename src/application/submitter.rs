use std::sync::Arc;

use metrics::counter;
use tracing::{error, info, warn};

use crate::application::api::PostsApi;
use crate::application::error::SubmitError;
use crate::application::lister::PostLister;
use crate::application::page::{FormField, PageSurface, SubmitEvent};
use crate::domain::posts::PostCreateRequest;

/// Intercepts form submission and writes the post.
///
/// A submission moves Idle → Submitting → Idle. On success the fields are
/// cleared and the list is refreshed; on failure the fields keep their values
/// and the user is alerted. Nothing is rendered optimistically.
#[derive(Clone)]
pub struct PostSubmitter {
    api: Arc<dyn PostsApi>,
    lister: PostLister,
}

impl PostSubmitter {
    pub fn new(api: Arc<dyn PostsApi>, lister: PostLister) -> Self {
        Self { api, lister }
    }

    pub async fn submit<P>(
        &self,
        page: &mut P,
        event: &mut SubmitEvent,
    ) -> Result<(), SubmitError>
    where
        P: PageSurface + ?Sized,
    {
        event.prevent_default();

        // Forwarded as typed, empty values included.
        let request = PostCreateRequest::new(
            page.field_value(FormField::Title),
            page.field_value(FormField::Content),
        );

        if let Err(source) = self.api.create_post(&request).await {
            let err = SubmitError::from(source);
            match &err {
                SubmitError::Rejected { status } => {
                    warn!(target = "postboard::submitter", status, "Post rejected");
                }
                SubmitError::Failed(source) => {
                    error!(
                        target = "postboard::submitter",
                        error = %source,
                        "Error creating post"
                    );
                }
            }
            counter!("postboard_posts_submit_total", "outcome" => "error").increment(1);
            page.alert(err.alert_message());
            return Err(err);
        }

        counter!("postboard_posts_submit_total", "outcome" => "ok").increment(1);
        info!(target = "postboard::submitter", title = %request.title, "Post created");
        for field in FormField::ALL {
            page.set_field_value(field, "");
        }

        // A failed refresh is already shown in the container.
        let _ = self.lister.refresh(page).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    use crate::application::api::ApiError;
    use crate::application::page::ContainerContent;
    use crate::application::testing::{StubPostsApi, sample_post};
    use crate::presentation::document::Document;

    fn submitter(api: &Arc<StubPostsApi>) -> PostSubmitter {
        let lister = PostLister::new(api.clone(), Tz::UTC);
        PostSubmitter::new(api.clone(), lister)
    }

    #[tokio::test]
    async fn success_clears_fields_and_refreshes() {
        let api = Arc::new(
            StubPostsApi::default()
                .with_create(Ok(()))
                .with_list(Ok(vec![sample_post("Hi", "there", "2024-05-01T00:00:00Z")])),
        );
        let mut page = Document::with_form("Hi", "there");
        let mut event = SubmitEvent::new();

        submitter(&api)
            .submit(&mut page, &mut event)
            .await
            .expect("submit");

        assert!(event.default_prevented());
        assert_eq!(page.field_value(FormField::Title), "");
        assert_eq!(page.field_value(FormField::Content), "");
        assert_eq!(api.list_calls(), 1);
        assert_eq!(page.container().post_count(), 1);
        assert!(page.alerts().is_empty());
        assert_eq!(api.created(), vec![PostCreateRequest::new("Hi", "there")]);
    }

    #[tokio::test]
    async fn rejection_alerts_and_keeps_fields() {
        let api = Arc::new(
            StubPostsApi::default().with_create(Err(ApiError::Status { status: 400 })),
        );
        let mut page = Document::with_form("Draft", "words");
        let mut event = SubmitEvent::new();

        let err = submitter(&api)
            .submit(&mut page, &mut event)
            .await
            .expect_err("rejected");

        assert!(matches!(err, SubmitError::Rejected { status: 400 }));
        assert!(event.default_prevented());
        assert_eq!(page.field_value(FormField::Title), "Draft");
        assert_eq!(page.field_value(FormField::Content), "words");
        assert_eq!(page.alerts(), ["Failed to create post. Please try again."]);
        assert_eq!(api.list_calls(), 0);
        assert_eq!(page.container(), &ContainerContent::Blank);
    }

    #[tokio::test]
    async fn network_failure_alerts_with_generic_message() {
        let api = Arc::new(
            StubPostsApi::default().with_create(Err(ApiError::transport("connection reset"))),
        );
        let mut page = Document::with_form("T", "C");
        let mut event = SubmitEvent::new();

        let err = submitter(&api)
            .submit(&mut page, &mut event)
            .await
            .expect_err("network failure");

        assert!(matches!(err, SubmitError::Failed(_)));
        assert!(event.default_prevented());
        assert_eq!(page.alerts(), ["An error occurred while creating the post."]);
        assert_eq!(page.field_value(FormField::Title), "T");
    }

    #[tokio::test]
    async fn empty_fields_are_forwarded_unvalidated() {
        let api = Arc::new(
            StubPostsApi::default()
                .with_create(Ok(()))
                .with_list(Ok(Vec::new())),
        );
        let mut page = Document::new();
        let mut event = SubmitEvent::new();

        submitter(&api)
            .submit(&mut page, &mut event)
            .await
            .expect("submit");

        assert_eq!(api.created(), vec![PostCreateRequest::new("", "")]);
        assert_eq!(page.container(), &ContainerContent::Placeholder);
    }

    #[tokio::test]
    async fn failed_refresh_after_create_still_succeeds() {
        let api = Arc::new(
            StubPostsApi::default()
                .with_create(Ok(()))
                .with_list(Err(ApiError::transport("gone"))),
        );
        let mut page = Document::with_form("T", "C");
        let mut event = SubmitEvent::new();

        submitter(&api)
            .submit(&mut page, &mut event)
            .await
            .expect("create succeeded");

        assert_eq!(page.field_value(FormField::Title), "");
        assert_eq!(page.container(), &ContainerContent::Error);
        assert!(page.alerts().is_empty());
    }
}
