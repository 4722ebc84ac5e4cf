use std::sync::Arc;

use chrono_tz::Tz;

use crate::application::api::PostsApi;
use crate::application::error::{FetchError, SubmitError};
use crate::application::lister::PostLister;
use crate::application::page::{PageSurface, SubmitEvent};
use crate::application::submitter::PostSubmitter;

/// Page controller: one lister and one submitter over a shared API client.
#[derive(Clone)]
pub struct PostBoard {
    lister: PostLister,
    submitter: PostSubmitter,
}

impl PostBoard {
    pub fn new(api: Arc<dyn PostsApi>, timezone: Tz) -> Self {
        let lister = PostLister::new(api.clone(), timezone);
        let submitter = PostSubmitter::new(api, lister.clone());
        Self { lister, submitter }
    }

    /// Page load: list once.
    pub async fn on_load<P>(&self, page: &mut P) -> Result<usize, FetchError>
    where
        P: PageSurface + ?Sized,
    {
        self.lister.refresh(page).await
    }

    /// Form submit on `createPostForm`.
    pub async fn on_submit<P>(
        &self,
        page: &mut P,
        event: &mut SubmitEvent,
    ) -> Result<(), SubmitError>
    where
        P: PageSurface + ?Sized,
    {
        self.submitter.submit(page, event).await
    }
}
