use serde::Deserialize;

/// OpenID userinfo returned by `GET /v2/userinfo`.
/// Only `sub` is needed to attribute a post; `name` is just logged.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    /// subject / member id
    pub sub: String,
    pub name: Option<String>,
}

impl UserInfo {
    pub fn person_urn(&self) -> String {
        person_urn(&self.sub)
    }
}

pub fn person_urn(sub: &str) -> String {
    format!("urn:li:person:{}", sub)
}
