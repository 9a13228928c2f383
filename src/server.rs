//! HTTP boundary around the extractor

use crate::config::{CorsConfig, ServiceConfig};
use crate::error::{Result, ServiceError};
use crate::extracted::{self, ExtractionResult};
use crate::types::{ExtractRequest, HealthStatus};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, get, post, web};
use tracing::{info, warn};

/// Scan the posted text for emails and phone numbers
#[post("/extract")]
#[allow(clippy::unused_async)]
pub async fn extract_contacts(payload: web::Json<ExtractRequest>) -> Result<HttpResponse> {
    let text = payload.validated_text().inspect_err(|e| {
        warn!("Rejected extraction request: {e}");
    })?;

    let result = ExtractionResult::extract(text);
    Ok(HttpResponse::Ok().json(result))
}

#[get("/health")]
#[allow(clippy::unused_async)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::ok())
}

/// Register the routes and JSON body handling on an app.
pub fn configure(cfg: &mut web::ServiceConfig, max_payload_bytes: usize) {
    let json_config = web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(|err, _req| {
            warn!("Unreadable extraction payload: {err}");
            ServiceError::InvalidPayload(err.to_string()).into()
        });

    cfg.app_data(json_config).service(extract_contacts).service(health);
}

/// Build the cross-origin policy for the configured origins.
#[must_use]
pub fn build_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}

/// Bind and run the HTTP server until it is shut down.
pub async fn run(config: ServiceConfig) -> std::io::Result<()> {
    extracted::warm_up();

    let bind_address = config.bind_address();
    let max_payload_bytes = config.server.max_payload_bytes;
    let cors_config = config.cors;

    info!(
        "Allowed origins: {}",
        cors_config.allowed_origins.join(", ")
    );
    info!("Server will listen on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .configure(|cfg| configure(cfg, max_payload_bytes))
    })
    .bind(&bind_address)?
    .run()
    .await
}
