use crate::models::{Category, Package, Theme};

/// Upper end of the budget slider; the default, non-narrowing price bound
pub const DEFAULT_MAX_PRICE: u32 = 250_000;

/// User-selected narrowing applied on top of a base package list
///
/// `None` for `theme` or `category` means "all". A criteria value is never
/// edited in place: every change in the UI builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub max_price: u32,
    pub theme: Option<Theme>,
    pub category: Option<Category>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            theme: None,
            category: None,
        }
    }
}

impl FilterCriteria {
    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_max_price(self, max_price: u32) -> Self {
        Self { max_price, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..self
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    /// Whether any field narrows the result compared to the defaults
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.max_price < DEFAULT_MAX_PRICE
            || self.theme.is_some()
            || self.category.is_some()
    }
}

/// Case-insensitive substring match against title, country, description and themes
///
/// An empty term matches everything.
#[inline]
pub fn matches_text(package: &Package, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();

    package.title.to_lowercase().contains(&needle)
        || package.country.to_lowercase().contains(&needle)
        || package.description.to_lowercase().contains(&needle)
        || package
            .themes
            .iter()
            .any(|theme| theme.as_str().contains(&needle))
}

/// Only the starting price is compared with the budget, so a package whose
/// range straddles the bound still passes.
#[inline]
pub fn matches_price(package: &Package, max_price: u32) -> bool {
    package.price_min <= max_price
}

#[inline]
pub fn matches_theme(package: &Package, theme: Option<Theme>) -> bool {
    theme.map_or(true, |theme| package.has_theme(theme))
}

#[inline]
pub fn matches_category(package: &Package, category: Option<Category>) -> bool {
    category.map_or(true, |category| package.category == category)
}

/// Narrow `base` to the packages satisfying every criterion
///
/// Predicates run text, price, theme, then category. The result keeps the
/// relative order of `base`.
pub fn apply_filters<'a>(base: &[&'a Package], criteria: &FilterCriteria) -> Vec<&'a Package> {
    base.iter()
        .copied()
        .filter(|package| matches_text(package, &criteria.search_term))
        .filter(|package| matches_price(package, criteria.max_price))
        .filter(|package| matches_theme(package, criteria.theme))
        .filter(|package| matches_category(package, criteria.category))
        .collect()
}

/// Free-text search over a whole catalog
///
/// Only the text predicate applies. A blank query yields no results rather
/// than the whole catalog.
pub fn search<'a>(catalog: &'a [Package], query: &str) -> Vec<&'a Package> {
    if query.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|package| matches_text(package, query))
        .collect()
}
