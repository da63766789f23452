//! Disease detection from a leaf photo
//!
//! The service contract is image in, `DiseaseDiagnosis` out. `Simulated`
//! waits a fixed latency and picks uniformly from the diagnosis catalog;
//! `Remote` posts the image as multipart to a classifier and decodes the same
//! payload shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{diagnosis_catalog, DiseaseDiagnosis};

use super::{pick_uniform, simulate_latency, SharedRng};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please choose an image to analyze")]
    MissingImage,
    #[error("'{0}' is not an image")]
    NotAnImage(String),
    #[error("Classifier request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Classifier returned HTTP {0}")]
    Status(u16),
    #[error("No diagnoses available")]
    EmptyCatalog,
    #[error("Random source unavailable")]
    RngPoisoned,
}

impl AnalysisError {
    /// Whether the user can fix this by choosing another file
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::MissingImage | AnalysisError::NotAnImage(_))
    }
}

/// One uploaded file
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Non-empty and declared as `image/*`
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.bytes.is_empty() {
            return Err(AnalysisError::MissingImage);
        }
        if !self.content_type.starts_with("image/") {
            return Err(AnalysisError::NotAnImage(self.file_name.clone()));
        }
        Ok(())
    }

    /// `data:` URL for the local preview
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone)]
pub enum DiagnosisService {
    Simulated {
        latency: Duration,
    },
    Remote {
        client: reqwest::Client,
        url: String,
    },
}

impl DiagnosisService {
    pub fn simulated(latency: Duration) -> Self {
        DiagnosisService::Simulated { latency }
    }

    pub fn remote(client: reqwest::Client, url: impl Into<String>) -> Self {
        DiagnosisService::Remote {
            client,
            url: url.into(),
        }
    }

    pub async fn diagnose(
        &self,
        image: &ImageUpload,
        rng: &SharedRng,
    ) -> Result<DiseaseDiagnosis, AnalysisError> {
        image.validate()?;

        match self {
            DiagnosisService::Simulated { latency } => {
                tracing::debug!(
                    "Simulating analysis of '{}' ({} bytes)",
                    image.file_name,
                    image.bytes.len()
                );
                simulate_latency(*latency).await;

                let mut rng = rng.lock().map_err(|_| AnalysisError::RngPoisoned)?;
                let diagnosis = pick_uniform(diagnosis_catalog(), &mut *rng)
                    .cloned()
                    .ok_or(AnalysisError::EmptyCatalog)?;
                tracing::info!(
                    "Simulated diagnosis: {} ({}% confidence)",
                    diagnosis.disease,
                    diagnosis.confidence
                );
                Ok(diagnosis)
            }
            DiagnosisService::Remote { client, url } => {
                let part = reqwest::multipart::Part::bytes(image.bytes.clone())
                    .file_name(image.file_name.clone())
                    .mime_str(&image.content_type)?;
                let form = reqwest::multipart::Form::new().part("image", part);

                let resp = client.post(url).multipart(form).send().await?;
                if !resp.status().is_success() {
                    return Err(AnalysisError::Status(resp.status().as_u16()));
                }

                let diagnosis: DiseaseDiagnosis = resp.json().await?;
                tracing::info!("Remote diagnosis: {}", diagnosis.disease);
                Ok(diagnosis)
            }
        }
    }
}
