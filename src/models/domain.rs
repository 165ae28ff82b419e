use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel accepted wherever a theme or category filter may be left open
pub const ALL: &str = "all";

/// Error returned when a theme or category name is not part of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Thematic tag attached to a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Beach,
    Adventure,
    Romantic,
    Cultural,
    Nature,
    Spiritual,
    Urban,
    Luxury,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Beach,
        Theme::Adventure,
        Theme::Romantic,
        Theme::Cultural,
        Theme::Nature,
        Theme::Spiritual,
        Theme::Urban,
        Theme::Luxury,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Beach => "beach",
            Theme::Adventure => "adventure",
            Theme::Romantic => "romantic",
            Theme::Cultural => "cultural",
            Theme::Nature => "nature",
            Theme::Spiritual => "spiritual",
            Theme::Urban => "urban",
            Theme::Luxury => "luxury",
        }
    }

    /// Human readable label used by filter pickers
    pub fn label(self) -> &'static str {
        match self {
            Theme::Beach => "Beach & Coastal",
            Theme::Adventure => "Adventure & Trekking",
            Theme::Romantic => "Romantic & Honeymoon",
            Theme::Cultural => "Cultural & Heritage",
            Theme::Nature => "Nature & Wildlife",
            Theme::Spiritual => "Spiritual & Wellness",
            Theme::Urban => "City & Urban",
            Theme::Luxury => "Luxury & Premium",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError::UnknownTheme(s.to_string()))
    }
}

/// Trip category assigned to every package when the catalog is authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weekend,
    Domestic,
    International,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Weekend, Category::Domestic, Category::International];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Weekend => "weekend",
            Category::Domestic => "domestic",
            Category::International => "international",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Weekend => "Weekend Getaways",
            Category::Domestic => "Hill Stations",
            Category::International => "International Trips",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError::UnknownCategory(s.to_string()))
    }
}

/// A destination package from the static catalog
///
/// Packages are authored once in [`crate::catalog`] and never change at runtime,
/// so every field borrows from static data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: &'static str,
    pub title: &'static str,
    pub country: &'static str,
    pub duration_label: &'static str,
    pub description: &'static str,
    pub price_min: u32,
    pub price_max: u32,
    pub themes: &'static [Theme],
    pub category: Category,
    pub image: &'static str,
    pub hero_image: &'static str,
    pub overview: &'static str,
    pub highlights: &'static [&'static str],
    pub best_time: &'static str,
    pub ideal_for: &'static str,
    pub activities: &'static [&'static str],
    pub rating: f32,
    pub reviews: u32,
}

impl Package {
    pub fn has_theme(&self, theme: Theme) -> bool {
        self.themes.contains(&theme)
    }
}

/// Status of a booking stored in the remote document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// Booking record as kept in the remote `bookings` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: String,
    pub destination: String,
    #[serde(rename = "bookingDate")]
    pub booking_date: String,
    #[serde(rename = "travelDate")]
    pub travel_date: String,
    pub status: BookingStatus,
    pub price: String,
    #[serde(rename = "numberOfPeople")]
    pub number_of_people: u32,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
}

/// Identity of a signed-in user
///
/// Handed explicitly to whatever needs to know who is asking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
