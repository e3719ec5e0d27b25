use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_FIELDS_MESSAGE: &str = "Content and access token are required";

/// Body the form sends to `POST /api/post`.
#[derive(Debug, Default, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}

impl PostRequest {
    /// Returns `(content, access_token)` when both are present and non-empty.
    /// Whitespace-only content is accepted here; the form trims before sending.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let content = self.content.as_deref().filter(|s| !s.is_empty())?;
        let token = self.access_token.as_deref().filter(|s| !s.is_empty())?;
        Some((content, token))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSuccess {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

impl PostSuccess {
    pub fn new(post_id: Option<String>) -> Self {
        Self { success: true, post_id }
    }
}

#[derive(Debug, Serialize)]
pub struct PostFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl PostFailure {
    pub fn message(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: Value) -> Self {
        Self { error: error.into(), details: Some(details) }
    }
}
