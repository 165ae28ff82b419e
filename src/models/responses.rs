use crate::core::categorizer::DurationCategory;
use crate::core::pricing::{format_price_range, PricePreset};
use crate::models::domain::{Booking, Category, Package, Session, Theme};
use serde::{Deserialize, Serialize};

/// Card-sized view of a package used in result lists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub country: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price_min: u32,
    pub price_max: u32,
    pub price_range: String,
    pub themes: &'static [Theme],
    pub category: Category,
    pub rating: f32,
    pub reviews: u32,
}

impl From<&Package> for PackageSummary {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id,
            title: package.title,
            country: package.country,
            duration: package.duration_label,
            description: package.description,
            image: package.image,
            price_min: package.price_min,
            price_max: package.price_max,
            price_range: format_price_range(package.price_min, package.price_max),
            themes: package.themes,
            category: package.category,
            rating: package.rating,
            reviews: package.reviews,
        }
    }
}

/// Full detail view of a single package
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetailResponse {
    #[serde(flatten)]
    pub package: &'static Package,
    pub price_range: String,
}

/// Response for the filtered listing endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageListResponse {
    pub total_packages: usize,
    pub filtered_count: usize,
    pub has_active_filters: bool,
    pub packages: Vec<PackageSummary>,
}

/// Response for duration-driven recommendations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub category: DurationCategory,
    pub duration: i64,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_packages: usize,
    pub filtered_count: usize,
    pub has_active_filters: bool,
    pub packages: Vec<PackageSummary>,
}

/// Response for free-text search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub packages: Vec<PackageSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Vocabularies and defaults for building a filter panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResponse {
    pub themes: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
    pub price_presets: Vec<PricePreset>,
    pub default_max_price: u32,
}

/// Acknowledgement for a submitted booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub booking_id: String,
    pub package_id: String,
    pub destination: String,
    pub message: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Where a bookings list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingSource {
    Remote,
    Fallback,
    /// No lookup was made because the session carries no email
    Skipped,
}

/// Response for the profile bookings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub user: Session,
    pub source: BookingSource,
    pub bookings: Vec<Booking>,
}

/// Response for a successful sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub user: Session,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub packages: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
