//! Wire types for the `/api/posts` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A post as returned by `GET /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned identifier, when the server exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// ISO-8601 creation timestamp, kept verbatim; parsing happens at render time.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
}

impl PostCreateRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reads_camel_case_created_at() {
        let post: Post = serde_json::from_str(
            r#"{"id":7,"title":"Hello","content":"World","createdAt":"2024-05-01T09:30:00"}"#,
        )
        .expect("valid post");

        assert_eq!(post.id, Some(7));
        assert_eq!(post.title, "Hello");
        assert_eq!(post.created_at.as_deref(), Some("2024-05-01T09:30:00"));
    }

    #[test]
    fn post_tolerates_missing_fields() {
        let post: Post = serde_json::from_str(r#"{"createdAt":null}"#).expect("valid post");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert!(post.created_at.is_none());
    }

    #[test]
    fn null_text_does_not_reject_the_collection() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[{"title":null,"content":"kept","createdAt":"2024-05-01"},{"title":"B","content":null}]"#,
        )
        .expect("valid posts");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].content, "kept");
        assert_eq!(posts[1].content, "");
    }

    #[test]
    fn create_request_has_exactly_title_and_content() {
        let body = serde_json::to_value(PostCreateRequest::new("", "body")).expect("json");
        assert_eq!(body, serde_json::json!({"title": "", "content": "body"}));
    }
}
