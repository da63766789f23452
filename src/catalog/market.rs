//! Mandi (wholesale market) prices and export buyers

use serde::Serialize;
use std::sync::OnceLock;

use super::SelectOption;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub id: String,
    pub crop: String,
    pub variety: String,
    pub market: String,
    pub state: String,
    pub current_price: u32,
    pub previous_price: u32,
    pub price_change: i32,
    pub price_change_percent: f64,
    pub last_updated: String,
    pub unit: String,
    pub quality: String,
}

impl MarketPrice {
    pub fn trend(&self) -> PriceTrend {
        PriceTrend::from_change(self.price_change)
    }

    /// Signed change, e.g. "+70 (+2.71%)" or "-150 (-2.80%)"
    pub fn change_display(&self) -> String {
        let sign = if self.price_change > 0 { "+" } else { "" };
        format!(
            "{sign}{} ({sign}{:.2}%)",
            self.price_change, self.price_change_percent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
}

impl PriceTrend {
    pub fn from_change(change: i32) -> Self {
        match change {
            c if c > 0 => PriceTrend::Up,
            c if c < 0 => PriceTrend::Down,
            _ => PriceTrend::Flat,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PriceTrend::Up => "text-success",
            PriceTrend::Down => "text-destructive",
            PriceTrend::Flat => "text-muted",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PriceTrend::Up => "trending-up",
            PriceTrend::Down => "trending-down",
            PriceTrend::Flat => "dollar-sign",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportCompany {
    pub id: String,
    pub name: String,
    pub crops: Vec<String>,
    pub location: String,
    pub contact: String,
    pub email: String,
    pub website: String,
    pub rating: f32,
    pub minimum_quantity: String,
}

impl ExportCompany {
    /// Filled stars out of five (floor of the rating)
    pub fn filled_stars(&self) -> usize {
        (self.rating.floor().max(0.0) as usize).min(5)
    }

    /// CSS class per star of the five-star row
    pub fn star_classes(&self) -> Vec<&'static str> {
        let filled = self.filled_stars();
        (0..5)
            .map(|i| if i < filled { "star filled" } else { "star" })
            .collect()
    }
}

pub const MARKET_STATES: &[SelectOption] = &[
    SelectOption::new("all", "All States"),
    SelectOption::new("Punjab", "Punjab"),
    SelectOption::new("Haryana", "Haryana"),
    SelectOption::new("Gujarat", "Gujarat"),
    SelectOption::new("Uttar Pradesh", "Uttar Pradesh"),
    SelectOption::new("Karnataka", "Karnataka"),
    SelectOption::new("Madhya Pradesh", "Madhya Pradesh"),
];

pub const MARKET_CROPS: &[SelectOption] = &[
    SelectOption::new("all", "All Crops"),
    SelectOption::new("Wheat", "Wheat"),
    SelectOption::new("Rice", "Rice"),
    SelectOption::new("Cotton", "Cotton"),
    SelectOption::new("Sugarcane", "Sugarcane"),
    SelectOption::new("Maize", "Maize"),
    SelectOption::new("Soybean", "Soybean"),
];

static PRICES: OnceLock<Vec<MarketPrice>> = OnceLock::new();
static EXPORTERS: OnceLock<Vec<ExportCompany>> = OnceLock::new();

pub fn price_catalog() -> &'static [MarketPrice] {
    PRICES.get_or_init(|| {
        let price = |id: &str, crop: &str, variety: &str, market: &str, state: &str,
                     current_price: u32, previous_price: u32, price_change: i32,
                     price_change_percent: f64, last_updated: &str, quality: &str| MarketPrice {
            id: id.to_string(),
            crop: crop.to_string(),
            variety: variety.to_string(),
            market: market.to_string(),
            state: state.to_string(),
            current_price,
            previous_price,
            price_change,
            price_change_percent,
            last_updated: last_updated.to_string(),
            unit: "per quintal".to_string(),
            quality: quality.to_string(),
        };

        vec![
            price("1", "Wheat", "HD-2967", "Ludhiana", "Punjab", 2650, 2580, 70, 2.71, "2024-01-15 09:30", "FAQ"),
            price("2", "Rice", "Basmati 1121", "Karnal", "Haryana", 5200, 5350, -150, -2.80, "2024-01-15 10:15", "Superior"),
            price("3", "Cotton", "MCU-5", "Rajkot", "Gujarat", 6800, 6750, 50, 0.74, "2024-01-15 11:00", "Medium"),
            price("4", "Sugarcane", "Co-0238", "Muzaffarnagar", "Uttar Pradesh", 350, 340, 10, 2.94, "2024-01-15 08:45", "Good"),
            price("5", "Maize", "Hybrid", "Davangere", "Karnataka", 2100, 2120, -20, -0.94, "2024-01-15 09:15", "FAQ"),
            price("6", "Soybean", "JS-335", "Indore", "Madhya Pradesh", 4500, 4450, 50, 1.12, "2024-01-15 10:30", "FAQ"),
        ]
    })
}

pub fn export_company_catalog() -> &'static [ExportCompany] {
    EXPORTERS.get_or_init(|| {
        let company = |id: &str, name: &str, crops: &[&str], location: &str, contact: &str,
                       email: &str, website: &str, rating: f32, minimum_quantity: &str| ExportCompany {
            id: id.to_string(),
            name: name.to_string(),
            crops: crops.iter().map(|c| c.to_string()).collect(),
            location: location.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
            website: website.to_string(),
            rating,
            minimum_quantity: minimum_quantity.to_string(),
        };

        vec![
            company("1", "Global Agri Exports Ltd.", &["Rice", "Wheat", "Spices"], "Mumbai, Maharashtra", "+91 22 2345 6789", "exports@globalagri.com", "www.globalagri.com", 4.5, "100 MT"),
            company("2", "Punjab Grain Export Corp.", &["Wheat", "Rice", "Cotton"], "Ludhiana, Punjab", "+91 161 234 5678", "info@punjabgrain.com", "www.punjabgrain.com", 4.3, "50 MT"),
            company("3", "Southern Spice Traders", &["Spices", "Coffee", "Tea"], "Kochi, Kerala", "+91 484 234 5678", "trade@southernspice.com", "www.southernspice.com", 4.7, "25 MT"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_recorded_change_matches_prices() {
        for p in price_catalog() {
            let change = p.current_price as i32 - p.previous_price as i32;
            assert_eq!(change, p.price_change, "{}", p.crop);

            let percent = change as f64 / p.previous_price as f64 * 100.0;
            assert_abs_diff_eq!(percent, p.price_change_percent, epsilon = 0.01);
        }
    }

    #[test]
    fn test_trend_and_display() {
        let prices = price_catalog();
        assert_eq!(prices[0].trend(), PriceTrend::Up);
        assert_eq!(prices[0].change_display(), "+70 (+2.71%)");
        assert_eq!(prices[1].trend(), PriceTrend::Down);
        assert_eq!(prices[1].change_display(), "-150 (-2.80%)");
        assert_eq!(PriceTrend::from_change(0), PriceTrend::Flat);
    }

    #[test]
    fn test_filled_stars() {
        let companies = export_company_catalog();
        assert_eq!(companies[0].filled_stars(), 4);
        assert_eq!(companies[2].filled_stars(), 4);
        assert_eq!(
            companies[1].star_classes(),
            vec!["star filled", "star filled", "star filled", "star filled", "star"]
        );
    }

    #[test]
    fn test_selector_values_cover_catalog() {
        for p in price_catalog() {
            assert!(MARKET_STATES.iter().any(|o| o.value == p.state));
            assert!(MARKET_CROPS.iter().any(|o| o.value == p.crop));
        }
    }
}
