//! TripCraft - catalog, recommendation and booking service for the TripCraft travel site
//!
//! The heart of the crate is a pure filtering core over a static package
//! catalog: trip-length categorization, four-way filtering and free-text search.
//! Around it sit a thin HTTP surface, a remote bookings client and pluggable sign-in.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{apply_filters, categorize, search, Categorization, DurationCategory, FilterCriteria};
pub use models::{Booking, Category, Package, Session, Theme};
