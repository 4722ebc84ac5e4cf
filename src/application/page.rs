//! The page elements the lister and submitter read and mutate.

use crate::presentation::views::PostItemView;

pub const FORM_ID: &str = "createPostForm";
pub const CONTAINER_ID: &str = "postsContainer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Content,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Title, FormField::Content];

    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Content => "content",
        }
    }
}

/// What the posts container currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContainerContent {
    /// Initial markup, before the first refresh.
    #[default]
    Blank,
    /// The server returned no posts.
    Placeholder,
    Posts(Vec<PostItemView>),
    /// The last refresh failed.
    Error,
}

impl ContainerContent {
    pub fn post_count(&self) -> usize {
        match self {
            ContainerContent::Posts(posts) => posts.len(),
            _ => 0,
        }
    }
}

/// A form submission in flight.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the navigation a native form submit would perform.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub trait PageSurface {
    /// Replace everything inside the posts container.
    fn replace_posts(&mut self, content: ContainerContent);

    fn field_value(&self, field: FormField) -> String;

    fn set_field_value(&mut self, field: FormField, value: &str);

    /// Show a blocking, user-facing message.
    fn alert(&mut self, message: &str);
}
