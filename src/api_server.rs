// Axum server: application state, router, error responses
//
// Pages are rendered server-side with askama; htmx requests get fragments
// (see web/handlers). Outbound calls go to the chat endpoint and, when
// configured, the remote disease classifier.

#[cfg(feature = "api")]
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use askama::Template;

#[cfg(feature = "api")]
use rand::rngs::StdRng;

#[cfg(feature = "api")]
use rand::SeedableRng;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::advisor::{shared_rng, AnalysisError, CropAdvisor, DiagnosisService, SharedRng};

#[cfg(feature = "api")]
use crate::chat::ChatBackend;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::web::handlers::{chat, forms, pages};

#[cfg(feature = "api")]
use crate::web::render;

#[cfg(feature = "api")]
use crate::web::sessions::ChatSessions;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub chat_backend: ChatBackend,
    pub crop_advisor: CropAdvisor,
    pub diagnosis: DiagnosisService,
    pub sessions: ChatSessions,
    /// Shared by the simulated classifier and new chat sessions
    pub rng: SharedRng,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// State with a fixed random source (tests seed it)
    pub fn with_rng(config: ServerConfig, rng: StdRng) -> anyhow::Result<Self> {
        let rng = shared_rng(rng);

        tracing::info!("Initializing chat backend client...");
        let chat_backend = ChatBackend::with_timeout(&config.chat_endpoint, config.chat_timeout)?;

        tracing::info!("Initializing crop advisor...");
        let crop_advisor = CropAdvisor::new(config.crop_delay);

        let diagnosis = match &config.disease_classifier_url {
            Some(url) => {
                tracing::info!("Using remote disease classifier at {}", url);
                let client = reqwest::Client::builder()
                    .timeout(config.chat_timeout)
                    .build()?;
                DiagnosisService::remote(client, url.clone())
            }
            None => {
                tracing::info!("Using simulated disease classifier");
                DiagnosisService::simulated(config.disease_delay)
            }
        };

        tracing::info!("Initializing Moka session cache...");
        let sessions = ChatSessions::new(config.session_idle, rng.clone());

        Ok(Self {
            config: Arc::new(config),
            chat_backend,
            crop_advisor,
            diagnosis,
            sessions,
            rng,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages (policies/market/community return fragments to htmx)
        .route("/", get(pages::home_page))
        .route("/community", get(pages::community_page))
        .route("/policies", get(pages::policies_page))
        .route("/market", get(pages::market_page))

        // Chat: a page load starts a session; a turn is submit + reply
        .route("/chat", get(chat::chat_page))
        .route("/chat/:session/messages", post(chat::submit_message))
        .route("/chat/:session/reply", post(chat::await_reply))

        // Advisor forms
        .route("/crops", get(forms::crops_page))
        .route("/crops/recommend", post(forms::recommend_crops))
        .route("/disease", get(forms::disease_page))
        .route("/disease/analyze", post(forms::analyze_image))

        // Stylesheet
        .nest_service("/static", static_dir)

        // Anything else
        .fallback(pages::not_found)

        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::max(body_limit)) // image uploads
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Template)]
#[template(path = "fragments/alert.html")]
pub struct AlertTemplate {
    pub level: &'static str,
    pub message: String,
}

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, level, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "warning", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "warning", msg),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "error", msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "error", msg)
            }
        };

        (status, render(&AlertTemplate { level, message })).into_response()
    }
}

#[cfg(feature = "api")]
impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        if err.is_client_error() {
            return AppError::BadRequest(err.to_string());
        }
        match err {
            AnalysisError::Http(_) | AnalysisError::Status(_) => AppError::Upstream(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}
