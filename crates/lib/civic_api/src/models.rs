//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of every chat endpoint. Fields are validated by the handlers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl ChatRequest {
    /// The message, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    /// The target language, if present and not blank.
    pub fn language(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Success envelope: `{ "reply": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyEnvelope<T> {
    pub reply: T,
}

/// Error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}
