// @zen-component: CHAT-StructuredHandlers
//
//! Structured chat handlers for the general assistant, LawBot and Talk2Gov.
//!
//! All three validate `message`, build the persona prompt, and answer with
//! `{ "reply": StructuredReply }`. Upstream failures arrive as sentinel
//! replies and are still answered with 200.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use civic_core::gemini::GenerationParams;
use civic_core::models::{Persona, StructuredReply};
use civic_core::prompts;
use tracing::{info, warn};

use super::{MESSAGE_REQUIRED, preview, read_request};
use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ReplyEnvelope};

type StructuredJson = Json<ReplyEnvelope<StructuredReply>>;

/// `POST /api/chat` — general civic assistant.
pub async fn unified_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<StructuredJson> {
    structured_reply_for(&state, Persona::General, read_request(payload)?).await
}

/// `POST /api/lawbot` — legal information.
pub async fn lawbot_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<StructuredJson> {
    structured_reply_for(&state, Persona::Legal, read_request(payload)?).await
}

/// `POST /api/talk2gov` — government schemes and services.
pub async fn talk2gov_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<StructuredJson> {
    structured_reply_for(&state, Persona::Government, read_request(payload)?).await
}

async fn structured_reply_for(
    state: &AppState,
    persona: Persona,
    request: ChatRequest,
) -> AppResult<StructuredJson> {
    let message = request
        .message()
        .ok_or_else(|| AppError::Validation(MESSAGE_REQUIRED.into()))?;

    info!(%persona, preview = %preview(message), "chat request received");

    let prompt = prompts::build_prompt(persona, message, None);
    let outcome = state
        .model
        .generate_structured_response(&prompt, GenerationParams::default())
        .await;

    if outcome.is_generated() {
        info!(%persona, sections = outcome.payload().sections.len(), "response generated");
    } else {
        warn!(%persona, summary = %outcome.payload().summary, "answering with fallback reply");
    }

    Ok(Json(ReplyEnvelope {
        reply: outcome.into_payload(),
    }))
}
