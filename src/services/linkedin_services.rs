// src/services/linkedin_services.rs
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::mask_key;
use crate::models::ugc_post::UgcPost;
use crate::models::user::UserInfo;

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("linkedin error: {status} {body}")]
    Api { status: u16, body: Value },
    #[error("invalid json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("userinfo response has no subject")]
    MissingSubject,
}

impl LinkedInError {
    /// HTTP status LinkedIn answered with, if it answered with an error at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            LinkedInError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of LinkedIn's error body, when present.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            LinkedInError::Api { body, .. } => body.get("message").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Raw upstream body, or a description when there is none.
    pub fn details(&self) -> Value {
        match self {
            LinkedInError::Api { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct LinkedInService {
    client: Client,
    api_base: String,
}

impl LinkedInService {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the member behind `access_token` via `GET /v2/userinfo`.
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, LinkedInError> {
        let url = format!("{}/v2/userinfo", self.api_base);
        debug!("GET {} with token {}", url, mask_key(access_token));

        let resp = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), text));
        }

        let mut json_val: Value = serde_json::from_str(&text)?;
        let sub = json_val
            .get("sub")
            .and_then(scalar_to_string)
            .ok_or(LinkedInError::MissingSubject)?;
        json_val["sub"] = Value::String(sub);

        Ok(serde_json::from_value(json_val)?)
    }

    /// Creates the share and returns its id (e.g. `urn:li:share:999`).
    /// Any 2xx means the post is live, so an unreadable body only loses the id.
    pub async fn create_ugc_post(
        &self,
        access_token: &str,
        post: &UgcPost,
    ) -> Result<Option<String>, LinkedInError> {
        let url = format!("{}/v2/ugcPosts", self.api_base);
        debug!("POST {} as {}", url, post.author);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(post)
            .send()
            .await?;

        let status = resp.status();
        // LinkedIn also echoes the new id in this header
        let restli_id = resp
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), text));
        }

        let body_id = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body.get("id").and_then(scalar_to_string));

        let post_id = body_id.or(restli_id.filter(|id| !id.is_empty()));
        if post_id.is_none() {
            warn!("LinkedIn accepted the post ({}) without returning an id: {}", status, text);
        }
        Ok(post_id)
    }

    /// Looks up the author, then publishes `content` as a public text post.
    /// Nothing is cached between the two calls or across requests.
    pub async fn publish_text(
        &self,
        access_token: &str,
        content: &str,
    ) -> Result<Option<String>, LinkedInError> {
        let user = self.fetch_user_info(access_token).await?;
        debug!("Posting as {} ({})", user.sub, user.name.as_deref().unwrap_or("unnamed"));
        let post = UgcPost::public_text(user.person_urn(), content);
        self.create_ugc_post(access_token, &post).await
    }
}

/// Strings pass through; numbers and booleans are rendered. Empty or structured values don't count.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn api_error(status: u16, text: String) -> LinkedInError {
    warn!("LinkedIn answered {}: {}", status, text);
    let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
    LinkedInError::Api { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn service(server: &MockServer) -> LinkedInService {
        LinkedInService::new(Client::new(), server.base_url())
    }

    #[tokio::test]
    async fn userinfo_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v2/userinfo")
                    .header("authorization", "Bearer valid-token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "sub": "12345", "name": "Ada Lovelace" }));
            })
            .await;

        let user = service(&server).fetch_user_info("valid-token").await.unwrap();
        assert_eq!(user.sub, "12345");
        assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn userinfo_without_sub_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v2/userinfo");
                then.status(200).json_body(json!({ "sub": "" }));
            })
            .await;

        let err = service(&server).fetch_user_info("t").await.unwrap_err();
        assert!(matches!(err, LinkedInError::MissingSubject));
        assert_eq!(err.upstream_status(), None);
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v2/userinfo");
                then.status(502).body("bad gateway");
            })
            .await;

        let err = service(&server).fetch_user_info("t").await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(502));
        assert_eq!(err.upstream_message(), None);
        assert_eq!(err.details(), json!("bad gateway"));
    }

    #[tokio::test]
    async fn post_id_falls_back_to_restli_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v2/ugcPosts")
                    .header("x-restli-protocol-version", "2.0.0");
                then.status(201).header("x-restli-id", "urn:li:share:42");
            })
            .await;

        let post = UgcPost::public_text("urn:li:person:1".to_string(), "hi");
        let id = service(&server).create_ugc_post("t", &post).await.unwrap();
        assert_eq!(id.as_deref(), Some("urn:li:share:42"));
        mock.assert_async().await;
    }

    async fn create_with_response(status: u16, body: &str) -> Option<String> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/v2/ugcPosts");
                then.status(status).body(body);
            })
            .await;

        let post = UgcPost::public_text("urn:li:person:1".to_string(), "hi");
        service(&server).create_ugc_post("t", &post).await.unwrap()
    }

    #[tokio::test]
    async fn created_post_without_any_id_still_succeeds() {
        assert_eq!(create_with_response(201, "{}").await, None);
    }

    #[tokio::test]
    async fn created_post_with_text_body_still_succeeds() {
        assert_eq!(create_with_response(201, "Created").await, None);
    }

    #[tokio::test]
    async fn numeric_post_id_is_stringified() {
        assert_eq!(create_with_response(201, r#"{"id":999}"#).await.as_deref(), Some("999"));
    }

    #[tokio::test]
    async fn numeric_sub_is_accepted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v2/userinfo");
                then.status(200).json_body(json!({ "sub": 12345 }));
            })
            .await;

        let user = service(&server).fetch_user_info("t").await.unwrap();
        assert_eq!(user.person_urn(), "urn:li:person:12345");
    }

    #[test]
    fn only_non_empty_scalars_become_ids() {
        assert_eq!(scalar_to_string(&json!("urn:li:share:1")).as_deref(), Some("urn:li:share:1"));
        assert_eq!(scalar_to_string(&json!(7)).as_deref(), Some("7"));
        assert_eq!(scalar_to_string(&json!("")), None);
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!({ "id": 1 })), None);
    }

    #[test]
    fn api_error_exposes_message_and_body() {
        let err = api_error(401, r#"{"message":"Invalid access token","status":401}"#.to_string());
        assert_eq!(err.upstream_status(), Some(401));
        assert_eq!(err.upstream_message(), Some("Invalid access token"));
        assert_eq!(err.details(), json!({ "message": "Invalid access token", "status": 401 }));
    }
}
