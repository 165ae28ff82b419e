use crate::catalog;
use crate::core::{apply_filters, categorize, search, trip_duration, DEFAULT_MAX_PRICE, PRICE_PRESETS};
use crate::models::{
    BookingRequest, Category, FilterOption, FilterOptionsResponse, HealthResponse, PackageDetailResponse,
    PackageListResponse, PackageQuery, PackageSummary, RecommendationsResponse, SearchResponse, Theme, TripQuery,
};
use crate::routes::error_response;
use crate::services::{submit_booking, BookingError};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/filters", web::get().to(filter_options))
        .route("/search/{query}", web::get().to(search_packages))
        .route("/packages", web::get().to(list_packages))
        // Must come before /packages/{id}
        .route("/packages/recommendations", web::get().to(recommendations))
        .route("/packages/{id}", web::get().to(package_detail))
        .route("/packages/{id}/bookings", web::post().to(book_package));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        packages: catalog::all().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Theme and category vocabularies, price presets and the default budget
async fn filter_options() -> impl Responder {
    HttpResponse::Ok().json(FilterOptionsResponse {
        themes: Theme::ALL
            .into_iter()
            .map(|t| FilterOption { value: t.as_str(), label: t.label() })
            .collect(),
        categories: Category::ALL
            .into_iter()
            .map(|c| FilterOption { value: c.as_str(), label: c.label() })
            .collect(),
        price_presets: PRICE_PRESETS.to_vec(),
        default_max_price: DEFAULT_MAX_PRICE,
    })
}

/// Filtered listing over the whole catalog
///
/// GET /api/v1/packages?q=&maxPrice=&theme=&category=
async fn list_packages(query: web::Query<PackageQuery>) -> impl Responder {
    let criteria = match query.to_criteria() {
        Ok(criteria) => criteria,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, "Invalid filter", e.to_string()),
    };

    let base: Vec<_> = catalog::all().iter().collect();
    let filtered = apply_filters(&base, &criteria);

    tracing::debug!("Filtered catalog to {} of {} packages with {:?}", filtered.len(), base.len(), criteria);

    HttpResponse::Ok().json(PackageListResponse {
        total_packages: base.len(),
        filtered_count: filtered.len(),
        has_active_filters: criteria.is_active(),
        packages: filtered.into_iter().map(PackageSummary::from).collect(),
    })
}

/// Packages recommended for a trip length, narrowed by the same filters
///
/// GET /api/v1/packages/recommendations?duration=5
/// GET /api/v1/packages/recommendations?startDate=2025-03-10&endDate=2025-03-15
async fn recommendations(trip: web::Query<TripQuery>, query: web::Query<PackageQuery>) -> impl Responder {
    let criteria = match query.to_criteria() {
        Ok(criteria) => criteria,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, "Invalid filter", e.to_string()),
    };

    let duration = match (trip.duration, trip.start_date, trip.end_date) {
        (Some(days), _, _) => days,
        (None, Some(start), Some(end)) => trip_duration(start, end),
        _ => 0,
    };

    let categorization = categorize(duration);
    let filtered = apply_filters(&categorization.packages, &criteria);

    tracing::debug!(
        "Recommending {} of {} {:?} packages for a {} day trip",
        filtered.len(),
        categorization.packages.len(),
        categorization.category,
        duration
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        category: categorization.category,
        duration,
        title: categorization.title,
        subtitle: categorization.subtitle,
        total_packages: categorization.packages.len(),
        filtered_count: filtered.len(),
        has_active_filters: criteria.is_active(),
        packages: filtered.into_iter().map(PackageSummary::from).collect(),
    })
}

/// Free-text search across the whole catalog
///
/// GET /api/v1/search/{query}
async fn search_packages(path: web::Path<String>) -> impl Responder {
    let query = path.into_inner().trim().to_string();
    let results = search(catalog::all(), &query);

    tracing::info!("Search for {:?} returned {} packages", query, results.len());

    HttpResponse::Ok().json(SearchResponse {
        total: results.len(),
        packages: results.into_iter().map(PackageSummary::from).collect(),
        query,
    })
}

/// Package detail
///
/// GET /api/v1/packages/{id}
async fn package_detail(path: web::Path<String>) -> impl Responder {
    match catalog::find(&path) {
        Some(package) => HttpResponse::Ok().json(PackageDetailResponse {
            package,
            price_range: crate::core::format_price_range(package.price_min, package.price_max),
        }),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Package not found",
            format!("No package with id '{}'", path),
        ),
    }
}

/// Submit a booking request
///
/// POST /api/v1/packages/{id}/bookings
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "phone": "string",
///   "preferredDate": "2025-03-15",
///   "numberOfPeople": 2,
///   "specialRequests": "string"
/// }
/// ```
async fn book_package(path: web::Path<String>, req: web::Json<BookingRequest>) -> impl Responder {
    let Some(package) = catalog::find(&path) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Package not found",
            format!("No package with id '{}'", path),
        );
    };

    let today = chrono::Utc::now().date_naive();

    match submit_booking(package, &req, today) {
        Ok(receipt) => HttpResponse::Created().json(receipt),
        Err(e @ BookingError::Invalid(_)) => {
            tracing::info!("Rejected booking for {}: {}", package.id, e);
            error_response(StatusCode::BAD_REQUEST, "Validation failed", e.to_string())
        }
        Err(e @ BookingError::PastDate(_)) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid preferred date", e.to_string())
        }
    }
}
