use serde::Serialize;

const LAKH: u32 = 100_000;
const THOUSAND: u32 = 1_000;

/// A budget step offered by the price slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePreset {
    pub value: u32,
    pub label: &'static str,
}

pub const PRICE_PRESETS: [PricePreset; 5] = [
    PricePreset { value: 15_000, label: "₹15K" },
    PricePreset { value: 30_000, label: "₹30K" },
    PricePreset { value: 60_000, label: "₹60K" },
    PricePreset { value: 120_000, label: "₹1.2L" },
    PricePreset { value: 250_000, label: "₹2.5L+" },
];

/// Format a rupee amount the way cards display it: thousands as `K`, lakhs as `L`
///
/// ```
/// use tripcraft::core::pricing::format_price;
/// assert_eq!(format_price(8_000), "₹8K");
/// assert_eq!(format_price(150_000), "₹1.5L");
/// ```
pub fn format_price(price: u32) -> String {
    if price >= LAKH {
        format!("₹{:.1}L", f64::from(price) / f64::from(LAKH))
    } else {
        // f64 Display drops a zero fraction, so 8000 renders as "8"
        format!("₹{}K", f64::from(price) / f64::from(THOUSAND))
    }
}

pub fn format_price_range(min: u32, max: u32) -> String {
    format!("{} - {}", format_price(min), format_price(max))
}
