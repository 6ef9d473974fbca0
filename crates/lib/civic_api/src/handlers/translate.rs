//! Local language assistant handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use civic_core::prompts;
use tracing::{info, warn};

use super::{LANGUAGE_REQUIRED, MESSAGE_REQUIRED, preview, read_request};
use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ReplyEnvelope};

/// `POST /api/translate` — translate `message` into `language`.
///
/// Answers with `{ "reply": "<translated text>" }`.
pub async fn translate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ReplyEnvelope<String>>> {
    let request = read_request(payload)?;
    let message = request
        .message()
        .ok_or_else(|| AppError::Validation(MESSAGE_REQUIRED.into()))?;
    let language = request
        .language()
        .ok_or_else(|| AppError::Validation(LANGUAGE_REQUIRED.into()))?;

    info!(%language, preview = %preview(message), "translation request received");

    let prompt = prompts::translation_prompt(message, language);
    let outcome = state.model.generate_translation(&prompt).await;

    if outcome.is_generated() {
        info!(%language, "translation generated");
    } else {
        warn!(%language, "answering with fallback translation");
    }

    Ok(Json(ReplyEnvelope {
        reply: outcome.into_payload(),
    }))
}
