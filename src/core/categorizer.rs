use crate::catalog;
use crate::models::{Category, Package};
use chrono::NaiveDate;
use serde::Serialize;

/// Trip bucket derived from the number of days between the selected dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationCategory {
    Weekend,
    Domestic,
    International,
    /// No (or an empty) date range selected yet
    Unset,
}

impl DurationCategory {
    /// Bucket a duration in days; 1-3 weekend, 4-6 domestic, 7+ international
    pub fn from_days(days: i64) -> Self {
        match days {
            1..=3 => DurationCategory::Weekend,
            4..=6 => DurationCategory::Domestic,
            d if d >= 7 => DurationCategory::International,
            _ => DurationCategory::Unset,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DurationCategory::Weekend => "Weekend Escapes",
            DurationCategory::Domestic => "Domestic Trips",
            DurationCategory::International => "International Trips",
            DurationCategory::Unset => "Recommended Packages",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            DurationCategory::Weekend => "Perfect short trips for a quick refreshing break",
            DurationCategory::Domestic => "Immersive experiences with time to truly explore",
            DurationCategory::International => "Epic journeys to distant lands and cultures",
            DurationCategory::Unset => "Select your travel dates to see personalized recommendations",
        }
    }

    /// Catalog subset recommended for this bucket
    pub fn packages(self) -> Vec<&'static Package> {
        match self {
            DurationCategory::Weekend => catalog::in_category(Category::Weekend),
            DurationCategory::Domestic => catalog::in_category(Category::Domestic),
            DurationCategory::International => catalog::in_category(Category::International),
            DurationCategory::Unset => Category::ALL
                .into_iter()
                .flat_map(catalog::in_category)
                .collect(),
        }
    }
}

/// Recommended packages plus the heading shown above them
#[derive(Debug, Clone)]
pub struct Categorization {
    pub category: DurationCategory,
    pub packages: Vec<&'static Package>,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Map a trip length to its recommended packages and heading
///
/// Total over every integer: anything below one day falls back to the whole
/// catalog under "Recommended Packages".
pub fn categorize(duration_days: i64) -> Categorization {
    let category = DurationCategory::from_days(duration_days);

    Categorization {
        category,
        packages: category.packages(),
        title: category.title(),
        subtitle: category.subtitle(),
    }
}

/// Whole days between two selected dates, regardless of the order they were picked in
pub fn trip_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}
