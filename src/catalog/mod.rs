//! Static catalogs
//!
//! Every record shown by the site is fixed mock data built once on first use
//! and never mutated afterwards:
//! - `crops`: crop recommendations + advisor form options
//! - `diseases`: diagnoses returned by the simulated classifier
//! - `community`: farmers, shared machines, farming groups
//! - `policies`: government schemes + selector options
//! - `market`: mandi prices, export companies + selector options
//! - `home`: landing page features, benefits, stats, testimonials

pub mod community;
pub mod crops;
pub mod diseases;
pub mod home;
pub mod market;
pub mod policies;

pub use community::{farmer_catalog, group_catalog, machine_catalog, Farmer, Group, Machine, MachineCondition};
pub use crops::{crop_catalog, CropRecommendation, SuitabilityTier};
pub use diseases::{diagnosis_catalog, DiseaseDiagnosis, Severity, Treatments};
pub use market::{export_company_catalog, price_catalog, ExportCompany, MarketPrice, PriceTrend};
pub use policies::{policy_catalog, PolicyCategory, PolicyScheme, PolicyStatus};

/// One entry of a `<select>` control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Group digits in threes, e.g. 11000000 -> "11,000,000"
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn test_ids_unique_within_each_catalog() {
        assert_unique(crop_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(farmer_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(machine_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(group_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(policy_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(price_catalog().iter().map(|r| r.id.as_str()));
        assert_unique(export_company_catalog().iter().map(|r| r.id.as_str()));
    }

    #[test]
    fn test_scores_in_range() {
        assert!(crop_catalog().iter().all(|c| c.suitability <= 100));
        assert!(diagnosis_catalog().iter().all(|d| d.confidence <= 100));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(654), "654");
        assert_eq!(format_thousands(1247), "1,247");
        assert_eq!(format_thousands(11_000_000), "11,000,000");
    }
}
