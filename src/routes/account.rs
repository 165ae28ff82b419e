use crate::models::{BookingsResponse, LoginRequest, LoginResponse};
use crate::routes::{error_response, AppState};
use crate::services::{load_bookings, AuthError};
use actix_web::{http::header, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Configure sign-in and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/profile/bookings", web::get().to(profile_bookings));
}

/// Sign in and receive a session token
///
/// POST /api/v1/auth/login
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let session = match state.verifier.verify(&req.email, &req.password).await {
        Ok(session) => session,
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Sign-in rejected for {}", req.email);
            return error_response(StatusCode::UNAUTHORIZED, "Invalid credentials", "Invalid email or password");
        }
        Err(e) => {
            tracing::error!("Sign-in failed for {}: {}", req.email, e);
            return error_response(StatusCode::BAD_GATEWAY, "Identity provider unavailable", e.to_string());
        }
    };

    match state.sessions.issue(&session) {
        Ok((token, expires_at)) => {
            tracing::info!("Signed in {} via {}", session.email, state.verifier.name());
            HttpResponse::Ok().json(LoginResponse {
                token,
                expires_at,
                user: session,
            })
        }
        Err(e) => {
            tracing::error!("Failed to issue session for {}: {}", session.email, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to issue session", e.to_string())
        }
    }
}

/// Bookings for the signed-in user
///
/// GET /api/v1/profile/bookings (Authorization: Bearer <token>)
async fn profile_bookings(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let authorization = http_req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let session = match state.sessions.session_from_header(authorization) {
        Ok(session) => session,
        Err(e) => return error_response(StatusCode::UNAUTHORIZED, "Unauthorized", e.to_string()),
    };

    let loaded = load_bookings(state.bookings.as_ref(), &session).await;

    tracing::info!(
        "Returning {} bookings for {} ({:?})",
        loaded.bookings.len(),
        session.email,
        loaded.source
    );

    HttpResponse::Ok().json(BookingsResponse {
        user: session,
        source: loaded.source,
        bookings: loaded.bookings,
    })
}
