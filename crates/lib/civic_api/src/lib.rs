//! # civic_api
//!
//! HTTP API library for CivicConnect.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use civic_core::gemini::LanguageModel;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::error::AppError;
use crate::handlers::{chat, health, translate};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend (Gemini in production).
    pub model: Arc<dyn LanguageModel>,
}

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::POST_API_CHAT, post(chat::unified_chat_handler))
        .route(routes::POST_API_LAWBOT, post(chat::lawbot_handler))
        .route(routes::POST_API_TALK2GOV, post(chat::talk2gov_handler))
        .route(routes::POST_API_TRANSLATE, post(translate::translate_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}

/// Maps a handler panic to the generic 500 body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
