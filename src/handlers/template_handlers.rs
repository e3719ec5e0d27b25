use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

use crate::dtos::template_dtos::TemplatesResponse;
use crate::models::template::{get_post_templates, MAX_CONTENT_LENGTH};

#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    status: String,
    message: String,
    data: Option<T>,
}

/// GET /api/templates
/// Quick-start templates for the form
#[get("/templates")]
pub async fn get_templates() -> impl Responder {
    let templates = get_post_templates();
    let response = TemplatesResponse {
        total: templates.len(),
        templates,
        max_content_length: MAX_CONTENT_LENGTH,
    };

    HttpResponse::Ok().json(ApiResponse {
        status: "success".to_string(),
        message: "Templates retrieved successfully".to_string(),
        data: Some(response),
    })
}
