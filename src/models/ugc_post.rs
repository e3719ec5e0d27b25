use serde::Serialize;

/// Body for `POST /v2/ugcPosts`, text-only share.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    pub author: String,
    pub lifecycle_state: LifecycleState,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Published,
}

#[derive(Debug, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareCommentary,
    pub share_media_category: ShareMediaCategory,
}

#[derive(Debug, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    None,
}

#[derive(Debug, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: MemberNetworkVisibility,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberNetworkVisibility {
    Public,
}

impl UgcPost {
    /// Published, public, plain-text post authored by `author_urn`.
    pub fn public_text(author_urn: String, text: impl Into<String>) -> Self {
        Self {
            author: author_urn,
            lifecycle_state: LifecycleState::Published,
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: ShareMediaCategory::None,
                },
            },
            visibility: Visibility {
                member_network_visibility: MemberNetworkVisibility::Public,
            },
        }
    }
}
