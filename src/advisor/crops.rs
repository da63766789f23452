//! Crop recommendation
//!
//! Only water availability narrows the catalog: `low` drops every crop whose
//! water requirement mentions "High" (which also catches "Very High"). Soil
//! type, land size, region, season and experience are collected and
//! validated but do not filter.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{crop_catalog, CropRecommendation};

use super::simulate_latency;

/// Farm details submitted by the advisor form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropForm {
    pub soil_type: String,
    pub water_availability: String,
    /// Acres, as typed
    pub land_size: String,
    pub region: String,
    pub season: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Land size is required")]
    MissingLandSize,
    #[error("Land size must be a positive number of acres")]
    InvalidLandSize,
    #[error("Region is required")]
    MissingRegion,
}

impl FormError {
    /// Form field the message is shown under
    pub fn field(&self) -> &'static str {
        match self {
            FormError::MissingLandSize | FormError::InvalidLandSize => "land_size",
            FormError::MissingRegion => "region",
        }
    }
}

impl CropForm {
    /// All problems at once, in field order
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        let land_size = self.land_size.trim();
        if land_size.is_empty() {
            errors.push(FormError::MissingLandSize);
        } else {
            match land_size.parse::<f64>() {
                Ok(acres) if acres.is_finite() && acres > 0.0 => {}
                _ => errors.push(FormError::InvalidLandSize),
            }
        }

        if self.region.trim().is_empty() {
            errors.push(FormError::MissingRegion);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn error_for<'a>(errors: &'a [FormError], field: &str) -> Option<&'a FormError> {
        errors.iter().find(|e| e.field() == field)
    }
}

/// Catalog entries that survive the form's water availability
pub fn select_recommendations<'a>(
    catalog: &'a [CropRecommendation],
    form: &CropForm,
) -> Vec<&'a CropRecommendation> {
    catalog
        .iter()
        .filter(|crop| form.water_availability != "low" || !crop.water_requirement.contains("High"))
        .collect()
}

/// Simulated recommendation backend
#[derive(Debug, Clone)]
pub struct CropAdvisor {
    latency: Duration,
}

impl CropAdvisor {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Wait out the configured latency, then select from the catalog
    pub async fn recommend(&self, form: &CropForm) -> Vec<CropRecommendation> {
        tracing::debug!(
            "Recommending crops (soil: '{}', water: '{}', region: '{}', season: '{}')",
            form.soil_type, form.water_availability, form.region, form.season
        );
        simulate_latency(self.latency).await;

        let picks: Vec<CropRecommendation> = select_recommendations(crop_catalog(), form)
            .into_iter()
            .cloned()
            .collect();
        tracing::info!("Crop advisor returned {} recommendations", picks.len());
        picks
    }
}
