// Route exports
pub mod account;
pub mod packages;

use crate::models::ErrorResponse;
use crate::services::{BookingStore, CredentialVerifier, SessionIssuer};
use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub sessions: Arc<SessionIssuer>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(packages::configure)
            .configure(account::configure),
    );
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}
