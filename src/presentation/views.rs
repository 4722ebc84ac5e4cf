use askama::{Error as AskamaError, Template};
use chrono_tz::Tz;
use thiserror::Error;

use crate::application::page::{CONTAINER_ID, ContainerContent, FORM_ID, FormField};
use crate::domain::posts::{self, Post};

pub const PLACEHOLDER_MESSAGE: &str = "No posts yet. Be the first to create one!";
pub const ERROR_MESSAGE: &str = "Error loading posts. Please try again later.";

#[derive(Debug, Error)]
#[error("{public_message} ({template})")]
pub struct TemplateRenderError {
    pub(crate) template: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(template: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            template,
            public_message,
            error,
        }
    }
}

/// One rendered entry of the posts container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostItemView {
    pub title: String,
    pub content: String,
    pub posted_on: String,
}

impl PostItemView {
    pub fn from_post(post: &Post, tz: Tz) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            posted_on: posts::format_posted_on(post.created_at.as_deref(), tz),
        }
    }
}

#[derive(Template)]
#[template(path = "posts_container.html")]
pub struct PostsContainerTemplate<'a> {
    pub message: Option<&'static str>,
    pub posts: &'a [PostItemView],
}

#[derive(Template)]
#[template(path = "posts_container.txt")]
pub struct PostsContainerTextTemplate<'a> {
    pub message: Option<&'static str>,
    pub posts: &'a [PostItemView],
}

#[derive(Template)]
#[template(path = "posts_page.html")]
pub struct PostsPageTemplate<'a> {
    pub form_id: &'static str,
    pub container_id: &'static str,
    pub title_id: &'static str,
    pub content_id: &'static str,
    pub title: &'a str,
    pub content: &'a str,
    pub container: String,
}

fn container_parts(content: &ContainerContent) -> (Option<&'static str>, &[PostItemView]) {
    match content {
        ContainerContent::Blank => (None, &[]),
        ContainerContent::Placeholder => (Some(PLACEHOLDER_MESSAGE), &[]),
        ContainerContent::Error => (Some(ERROR_MESSAGE), &[]),
        ContainerContent::Posts(posts) => (None, posts.as_slice()),
    }
}

pub fn render_container_html(content: &ContainerContent) -> Result<String, TemplateRenderError> {
    let (message, posts) = container_parts(content);
    PostsContainerTemplate { message, posts }
        .render()
        .map_err(|err| {
            TemplateRenderError::new("posts_container", "failed to render posts", err)
        })
}

pub fn render_container_text(content: &ContainerContent) -> Result<String, TemplateRenderError> {
    let (message, posts) = container_parts(content);
    PostsContainerTextTemplate { message, posts }
        .render()
        .map_err(|err| {
            TemplateRenderError::new("posts_container_text", "failed to render posts", err)
        })
}

pub fn render_page(
    content: &ContainerContent,
    title: &str,
    body: &str,
) -> Result<String, TemplateRenderError> {
    let container = render_container_html(content)?;
    PostsPageTemplate {
        form_id: FORM_ID,
        container_id: CONTAINER_ID,
        title_id: FormField::Title.element_id(),
        content_id: FormField::Content.element_id(),
        title,
        content: body,
        container,
    }
    .render()
    .map_err(|err| TemplateRenderError::new("posts_page", "failed to render page", err))
}
