//! Smart Farmer Helper
//!
//! Server-rendered farming assistant: AI chat, crop advisor, disease
//! detection, community directory, government policies and market prices.
//!
//! Library layout:
//! - `catalog/`: fixed mock data shown by every page
//! - `filter`: stable text + facet filter shared by the list pages
//! - `advisor/`: crop recommendation and disease detection services
//! - `chat/`: transcript controller and chat endpoint client
//! - `nav`: path -> active nav entry and mounted view
//! - `config`: environment configuration
//!
//! With the `api` feature (default): `api_server` (router, state, errors) and
//! `web/` (askama templates, htmx handlers, chat sessions).

pub mod advisor;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod filter;
pub mod nav;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use advisor::{CropAdvisor, CropForm, DiagnosisService, ImageUpload};
pub use chat::{ChatBackend, ChatController, ChatMessage, ChatState, Sender};
pub use config::ServerConfig;
pub use filter::{filter_catalog, Criteria, Facet, Filterable};
pub use nav::{Shell, View};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
