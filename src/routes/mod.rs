// Route exports
pub mod check_ins;
pub mod gyms;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

use crate::core::{Clock, DomainError};
use crate::models::{ErrorResponse, HealthResponse};
use crate::repositories::{CheckInRepository, GymRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gyms: Arc<dyn GymRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub clock: Arc<dyn Clock>,
    pub pool: PgPool,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(gyms::configure)
            .configure(check_ins::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = sqlx::query("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map a domain error onto the transport-level failure response. The core
/// never sees status codes; this is the whole mapping.
pub(crate) fn domain_error_response(err: &DomainError) -> HttpResponse {
    let (status, error) = match err {
        DomainError::ResourceNotFound(_) => (StatusCode::NOT_FOUND, "resource_not_found"),
        DomainError::MaxDistance { .. } => (StatusCode::BAD_REQUEST, "max_distance"),
        DomainError::MaxNumberOfCheckIns => (StatusCode::CONFLICT, "max_number_of_check_ins"),
        DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        DomainError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_failure"),
    };

    if status.is_server_error() {
        tracing::error!("request failed: {}", err);
    }

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "validation_failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
