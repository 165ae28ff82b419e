// Core catalog logic
pub mod categorizer;
pub mod filters;
pub mod pricing;

pub use categorizer::{categorize, trip_duration, Categorization, DurationCategory};
pub use filters::{apply_filters, search, FilterCriteria, DEFAULT_MAX_PRICE};
pub use pricing::{format_price, format_price_range, PricePreset, PRICE_PRESETS};
