// src/main.rs
mod config;
mod dtos;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use reqwest::Client;

use crate::config::AppConfig;
use crate::handlers::page_handlers::index;
use crate::handlers::post_handlers::{json_config, publish_post};
use crate::handlers::template_handlers::get_templates;
use crate::services::linkedin_services::LinkedInService;

/// Shortens a secret for logs, keeping only its first and last four characters.
fn mask_key(k: &str) -> String {
    let chars: Vec<char> = k.chars().collect();
    if chars.len() <= 8 {
        "[REDACTED]".to_string()
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub linkedin: LinkedInService,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("LinkedIn API base: {}", config.linkedin_api_base);

    let http_client = match Client::builder()
        .user_agent(concat!("linkedin-daily-poster/", env!("CARGO_PKG_VERSION")))
        .timeout(config.request_timeout)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build http client: {}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState {
        linkedin: LinkedInService::new(http_client, config.linkedin_api_base.clone()),
    });

    let allowed_origins = config.allowed_origins.clone();
    let bind_address = config.bind_address();
    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(publish_post)  // POST /api/post
                    .service(get_templates) // GET /api/templates
            )
            .service(index) // GET /
    })
    .bind(&bind_address)?
    .run()
    .await
}
