// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Booking, BookingStatus, Category, Package, ParseFilterError, Session, Theme, ALL};
pub use requests::{BookingRequest, LoginRequest, PackageQuery, TripQuery};
pub use responses::{
    BookingReceipt, BookingSource, BookingsResponse, ErrorResponse, FilterOption, FilterOptionsResponse,
    HealthResponse, LoginResponse, PackageDetailResponse, PackageListResponse, PackageSummary,
    RecommendationsResponse, SearchResponse,
};
