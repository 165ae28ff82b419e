use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tripcraft::config::{LoggingSettings, Settings};
use tripcraft::routes::{self, AppState};
use tripcraft::services::{
    CredentialVerifier, FallbackVerifier, FirestoreClient, IdentityToolkitVerifier, SessionIssuer,
    StaticCredentialVerifier,
};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(io_error(e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting TripCraft catalog service with {} packages", tripcraft::catalog::all().len());

    let firestore = FirestoreClient::new(
        settings.firestore.endpoint.clone(),
        settings.firestore.api_key.clone(),
        settings.firestore.project_id.clone(),
        settings.firestore.database_id.clone(),
        settings.firestore.bookings_collection.clone(),
        Duration::from_secs(settings.firestore.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to create Firestore client: {}", e);
        io_error(e)
    })?;

    info!("Firestore client initialized for project {}", settings.firestore.project_id);

    let identity = IdentityToolkitVerifier::new(
        settings.identity.endpoint.clone(),
        settings.identity.api_key.clone(),
        Duration::from_secs(settings.identity.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to create identity client: {}", e);
        io_error(e)
    })?;

    let verifier: Arc<dyn CredentialVerifier> = match &settings.auth.demo_account {
        Some(demo) => {
            warn!(
                "Demo account {} is enabled as a sign-in fallback; do not use this outside local demos",
                demo.email
            );
            let fallback = StaticCredentialVerifier::new(
                demo.email.clone(),
                demo.password.clone(),
                demo.user_id.clone(),
                demo.name.clone(),
            );
            Arc::new(FallbackVerifier::new(Arc::new(identity), Arc::new(fallback)))
        }
        None => Arc::new(identity),
    };

    info!("Sign-in verifier: {}", verifier.name());

    let sessions = SessionIssuer::new(&settings.auth.session_secret, settings.auth.session_ttl_secs)
        .map_err(|e| {
            error!("Failed to create session issuer: {}", e);
            io_error(e)
        })?;

    let app_state = AppState {
        bookings: Arc::new(firestore),
        verifier,
        sessions: Arc::new(sessions),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
