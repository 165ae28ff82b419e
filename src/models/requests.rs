use crate::core::filters::{FilterCriteria, DEFAULT_MAX_PRICE};
use crate::models::domain::{Category, ParseFilterError, Theme, ALL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Filter query string shared by the listing and recommendation endpoints
///
/// `GET /api/v1/packages?q=beach&maxPrice=30000&theme=romantic&category=all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<u32>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl PackageQuery {
    /// Build filter criteria, treating missing values and `"all"` as no filter
    pub fn to_criteria(&self) -> Result<FilterCriteria, ParseFilterError> {
        Ok(FilterCriteria {
            search_term: self.q.as_deref().map(str::trim).unwrap_or_default().to_string(),
            max_price: self.max_price.unwrap_or(DEFAULT_MAX_PRICE),
            theme: parse_selection::<Theme>(self.theme.as_deref())?,
            category: parse_selection::<Category>(self.category.as_deref())?,
        })
    }
}

fn parse_selection<T>(value: Option<&str>) -> Result<Option<T>, ParseFilterError>
where
    T: std::str::FromStr<Err = ParseFilterError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Trip length for recommendations, either as a day count or as a date range
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripQuery {
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<NaiveDate>,
}

/// Booking form submitted from a package page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[serde(rename = "preferredDate")]
    pub preferred_date: NaiveDate,
    #[serde(rename = "numberOfPeople", default = "default_party_size")]
    #[validate(range(min = 1, max = 20))]
    pub number_of_people: u32,
    #[serde(rename = "specialRequests", default)]
    #[validate(length(max = 2000))]
    pub special_requests: Option<String>,
}

fn default_party_size() -> u32 {
    2
}

/// Email and password sign-in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
