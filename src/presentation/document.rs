//! In-memory page: the posts container, the two form fields and an alert log.

use tracing::debug;

use crate::application::page::{ContainerContent, FormField, PageSurface};
use crate::presentation::views::{self, TemplateRenderError};

#[derive(Debug, Clone, Default)]
pub struct Document {
    container: ContainerContent,
    title: String,
    content: String,
    alerts: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose form is already filled in.
    pub fn with_form(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn container(&self) -> &ContainerContent {
        &self.container
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain alerts that have been shown since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn container_html(&self) -> Result<String, TemplateRenderError> {
        views::render_container_html(&self.container)
    }

    pub fn container_text(&self) -> Result<String, TemplateRenderError> {
        views::render_container_text(&self.container)
    }

    pub fn page_html(&self) -> Result<String, TemplateRenderError> {
        views::render_page(&self.container, &self.title, &self.content)
    }
}

impl PageSurface for Document {
    fn replace_posts(&mut self, content: ContainerContent) {
        self.container = content;
    }

    fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Content => self.content.clone(),
        }
    }

    fn set_field_value(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        };
        value.clone_into(slot);
    }

    fn alert(&mut self, message: &str) {
        debug!(target = "postboard::document", alert = message, "Alert shown");
        self.alerts.push(message.to_string());
    }
}
