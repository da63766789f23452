// Crop advisor and disease detection forms

use askama::Template;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_htmx::HxRequest;

use crate::advisor::{AnalysisError, CropForm, FormError, ImageUpload};
use crate::api_server::{AppError, AppState};
use crate::catalog::crops::{EXPERIENCE_LEVELS, SEASONS, SOIL_TYPES, WATER_LEVELS};
use crate::catalog::{CropRecommendation, DiseaseDiagnosis, SelectOption};
use crate::nav::Shell;
use crate::web::render;

use super::shell_for;

// ============================================================================
// Crop Advisor
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/crop_results.html")]
pub struct CropResultsTemplate {
    pub errors: Vec<FormError>,
    pub recommendations: Vec<CropRecommendation>,
    pub region: String,
}

#[derive(Template)]
#[template(path = "pages/crops.html")]
pub struct CropsTemplate {
    pub shell: Shell,
    pub form: CropForm,
    pub errors: Vec<FormError>,
    pub soil_types: &'static [SelectOption],
    pub water_levels: &'static [SelectOption],
    pub seasons: &'static [SelectOption],
    pub experience_levels: &'static [SelectOption],
    pub results: Option<CropResultsTemplate>,
}

impl CropsTemplate {
    fn new(shell: Shell, form: CropForm) -> Self {
        Self {
            shell,
            form,
            errors: Vec::new(),
            soil_types: SOIL_TYPES,
            water_levels: WATER_LEVELS,
            seasons: SEASONS,
            experience_levels: EXPERIENCE_LEVELS,
            results: None,
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&FormError> {
        CropForm::error_for(&self.errors, field)
    }
}

pub async fn crops_page(uri: Uri) -> impl IntoResponse {
    render(&CropsTemplate::new(shell_for(&uri), CropForm::default()))
}

pub async fn recommend_crops(
    State(state): State<AppState>,
    HxRequest(hx): HxRequest,
    Form(form): Form<CropForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        tracing::debug!("Rejected crop form: {:?}", errors);
        let body = if hx {
            render(&CropResultsTemplate {
                errors,
                recommendations: Vec::new(),
                region: form.region.clone(),
            })
        } else {
            let mut page = CropsTemplate::new(Shell::for_path("/crops"), form);
            page.errors = errors;
            render(&page)
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
    }

    let recommendations = state.crop_advisor.recommend(&form).await;
    let results = CropResultsTemplate {
        errors: Vec::new(),
        recommendations,
        region: form.region.trim().to_string(),
    };

    if hx {
        return render(&results).into_response();
    }
    let mut page = CropsTemplate::new(Shell::for_path("/crops"), form);
    page.results = Some(results);
    render(&page).into_response()
}

// ============================================================================
// Disease Detection
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/diagnosis.html")]
pub struct DiagnosisTemplate {
    pub file_name: String,
    /// data: URL of the uploaded image
    pub preview: String,
    pub diagnosis: DiseaseDiagnosis,
}

#[derive(Template)]
#[template(path = "pages/disease.html")]
pub struct DiseaseTemplate {
    pub shell: Shell,
    pub result: Option<DiagnosisTemplate>,
}

pub async fn disease_page(uri: Uri) -> impl IntoResponse {
    render(&DiseaseTemplate {
        shell: shell_for(&uri),
        result: None,
    })
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<ImageUpload>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read '{}': {}", file_name, e)))?;

        upload = Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Ok(upload)
}

pub async fn analyze_image(
    State(state): State<AppState>,
    HxRequest(hx): HxRequest,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let upload = read_upload(&mut multipart)
        .await?
        .ok_or(AnalysisError::MissingImage)?;
    tracing::info!(
        "Analyzing '{}' ({}, {} bytes)",
        upload.file_name,
        upload.content_type,
        upload.bytes.len()
    );

    let diagnosis = state.diagnosis.diagnose(&upload, &state.rng).await?;
    let result = DiagnosisTemplate {
        preview: upload.data_url(),
        file_name: upload.file_name,
        diagnosis,
    };

    if hx {
        return Ok(render(&result).into_response());
    }
    Ok(render(&DiseaseTemplate {
        shell: Shell::for_path("/disease"),
        result: Some(result),
    })
    .into_response())
}
