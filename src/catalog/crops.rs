//! Crop recommendation catalog and form option lists

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::SelectOption;

/// One recommended crop with agronomy notes for the advisor page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub id: String,
    pub name: String,
    pub variety: String,
    /// 0-100
    pub suitability: u8,
    pub reason: String,
    pub sowing_time: String,
    pub harvest_time: String,
    pub expected_yield: String,
    pub water_requirement: String,
    pub tips: Vec<String>,
    pub market_price: String,
}

impl CropRecommendation {
    pub fn tier(&self) -> SuitabilityTier {
        SuitabilityTier::from_score(self.suitability)
    }
}

/// Display tier derived from the suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitabilityTier {
    High,   // >= 90
    Medium, // >= 80
    Low,
}

impl SuitabilityTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            SuitabilityTier::High
        } else if score >= 80 {
            SuitabilityTier::Medium
        } else {
            SuitabilityTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SuitabilityTier::High => "badge-success",
            SuitabilityTier::Medium => "badge-warning",
            SuitabilityTier::Low => "badge-secondary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SuitabilityTier::High => "check-circle",
            SuitabilityTier::Medium => "alert-circle",
            SuitabilityTier::Low => "trending-up",
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn crop(
    id: &str,
    name: &str,
    variety: &str,
    suitability: u8,
    reason: &str,
    sowing_time: &str,
    harvest_time: &str,
    expected_yield: &str,
    water_requirement: &str,
    tips: &[&str],
    market_price: &str,
) -> CropRecommendation {
    CropRecommendation {
        id: id.to_string(),
        name: name.to_string(),
        variety: variety.to_string(),
        suitability,
        reason: reason.to_string(),
        sowing_time: sowing_time.to_string(),
        harvest_time: harvest_time.to_string(),
        expected_yield: expected_yield.to_string(),
        water_requirement: water_requirement.to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
        market_price: market_price.to_string(),
    }
}

static CROPS: OnceLock<Vec<CropRecommendation>> = OnceLock::new();

/// Crop recommendations in display order
pub fn crop_catalog() -> &'static [CropRecommendation] {
    CROPS.get_or_init(|| {
        vec![
            crop(
                "1",
                "Rice",
                "Basmati",
                95,
                "Perfect match for clay soil with high water availability",
                "June-July",
                "October-November",
                "40-50 quintals/hectare",
                "High (1200-1500mm)",
                &[
                    "Prepare fields with proper leveling",
                    "Use certified seeds for better yield",
                    "Apply organic manure before sowing",
                    "Monitor for pest attacks regularly",
                ],
                "₹25-30/kg",
            ),
            crop(
                "2",
                "Wheat",
                "HD-2967",
                88,
                "Good alternative with lower water requirement",
                "November-December",
                "March-April",
                "35-45 quintals/hectare",
                "Medium (450-650mm)",
                &[
                    "Sow at optimal temperature (18-22°C)",
                    "Ensure proper seed spacing",
                    "Apply nitrogen in 3 splits",
                    "Control weeds at early stage",
                ],
                "₹22-26/kg",
            ),
            crop(
                "3",
                "Sugarcane",
                "Co-0238",
                82,
                "Suitable for clay soil and high water conditions",
                "February-March",
                "December-January (Next year)",
                "800-1000 quintals/hectare",
                "Very High (1800-2200mm)",
                &[
                    "Use disease-free setts for planting",
                    "Maintain proper row spacing (90cm)",
                    "Regular irrigation and fertilization",
                    "Harvest at optimal maturity",
                ],
                "₹350-380/quintal",
            ),
        ]
    })
}

pub const SOIL_TYPES: &[SelectOption] = &[
    SelectOption::new("clay", "Clay Soil"),
    SelectOption::new("sandy", "Sandy Soil"),
    SelectOption::new("loamy", "Loamy Soil"),
    SelectOption::new("silt", "Silt Soil"),
    SelectOption::new("peaty", "Peaty Soil"),
    SelectOption::new("chalky", "Chalky Soil"),
];

pub const WATER_LEVELS: &[SelectOption] = &[
    SelectOption::new("high", "High (Irrigation Available)"),
    SelectOption::new("medium", "Medium (Rain + Some Irrigation)"),
    SelectOption::new("low", "Low (Rain Dependent)"),
];

pub const SEASONS: &[SelectOption] = &[
    SelectOption::new("spring", "Spring (Mar-May)"),
    SelectOption::new("summer", "Summer (Jun-Aug)"),
    SelectOption::new("monsoon", "Monsoon (Sep-Nov)"),
    SelectOption::new("winter", "Winter (Dec-Feb)"),
];

pub const EXPERIENCE_LEVELS: &[SelectOption] = &[
    SelectOption::new("beginner", "Beginner (0-2 years)"),
    SelectOption::new("intermediate", "Intermediate (3-10 years)"),
    SelectOption::new("expert", "Expert (10+ years)"),
];
