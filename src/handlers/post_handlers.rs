// src/handlers/post_handlers.rs

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use log::{error, info, warn};
use serde_json::Value;

use crate::dtos::post_dtos::{PostFailure, PostRequest, PostSuccess, MISSING_FIELDS_MESSAGE};
use crate::services::linkedin_services::LinkedInError;
use crate::AppState;

const FALLBACK_ERROR_MESSAGE: &str = "Failed to post to LinkedIn";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";
const JSON_LIMIT_BYTES: usize = 64 * 1024;

/// JSON extractor config: unreadable bodies get the same `{error, details}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .content_type_required(false)
        .error_handler(|err, _req| {
            let details = Value::String(err.to_string());
            let response = HttpResponse::BadRequest()
                .json(PostFailure::with_details(INVALID_BODY_MESSAGE, details));
            InternalError::from_response(err, response).into()
        })
}

/// POST /api/post
/// Resolves the token owner, then publishes `content` on their behalf.
#[post("/post")]
pub async fn publish_post(
    app_state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let Some((content, access_token)) = request.required_fields() else {
        warn!("Rejected post request with missing content or token");
        return HttpResponse::BadRequest().json(PostFailure::message(MISSING_FIELDS_MESSAGE));
    };

    match app_state.linkedin.publish_text(access_token, content).await {
        Ok(post_id) => {
            info!("Published LinkedIn post {}", post_id.as_deref().unwrap_or("(no id returned)"));
            HttpResponse::Ok().json(PostSuccess::new(post_id))
        }
        Err(e) => {
            error!("LinkedIn API Error: {}", e);
            upstream_failure(&e)
        }
    }
}

/// Identity and creation failures collapse to the same response.
fn upstream_failure(err: &LinkedInError) -> HttpResponse {
    let status = err
        .upstream_status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = err.upstream_message().unwrap_or(FALLBACK_ERROR_MESSAGE);

    HttpResponse::build(status).json(PostFailure::with_details(message, err.details()))
}
