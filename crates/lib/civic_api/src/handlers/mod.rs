//! Request handlers.

pub mod chat;
pub mod health;
pub mod translate;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::ChatRequest;

/// Validation message for a missing or blank `message`.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Validation message for a missing or blank `language`.
pub const LANGUAGE_REQUIRED: &str = "Target language is required";

const PREVIEW_CHARS: usize = 50;

/// Treats a missing or malformed JSON body as an empty request so it fails
/// validation. A body that could not be buffered keeps its own status
/// (413 when over the size limit).
pub(crate) fn read_request(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<ChatRequest> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::BytesRejection(rejection)) => {
            warn!(%rejection, "request body rejected");
            Err(AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })
        }
        Err(rejection) => {
            debug!(%rejection, "unreadable request body");
            Ok(ChatRequest::default())
        }
    }
}

/// First characters of a message for request logs.
pub(crate) fn preview(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
