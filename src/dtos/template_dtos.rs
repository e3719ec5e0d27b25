use serde::Serialize;
use crate::models::template::PostTemplate;

#[derive(Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<PostTemplate>,
    pub total: usize,
    pub max_content_length: usize,
}
