// @zen-component: CHAT-GeminiClient
//
//! Gemini module: single-shot calls to the Google generative-language API.
//!
//! # Public API
//!
//! - [`GeminiClient`] — HTTP client bound to one model and API key
//! - [`LanguageModel`] — the two operations the chat endpoints need
//! - [`Outcome`] — generated payload, or the sentinel that replaces it
//! - [`config::GeminiConfig`] — model, key and base URL from the environment
//!
//! No call ever returns an error to its caller: failures are reported as
//! [`Outcome::Failed`], which still carries a well-formed sentinel payload.

pub mod client;
pub mod config;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::StructuredReply;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GenerationParams};

/// Summary returned when the upstream call failed.
pub const GENERATION_FAILED_SUMMARY: &str = "Sorry, I couldn't generate a response at the moment.";

/// Translation returned when the model answered with no text.
pub const TRANSLATION_UNAVAILABLE: &str = "⚠️ Sorry, translation not available.";

/// Translation returned when the upstream call failed.
pub const TRANSLATION_FAILED: &str = "⚠️ Sorry, there was an error generating the translation.";

/// Errors that can occur while talking to the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Gemini request failed: {0}")]
    Transport(String),

    #[error("Gemini returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Gemini response parse error: {0}")]
    Decode(String),
}

/// Result of a no-throw generation call.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The model produced text.
    Generated(T),
    /// The call succeeded but the model produced no text.
    Empty(T),
    /// The call failed; `sentinel` stands in for the payload.
    Failed { sentinel: T, error: GeminiError },
}

impl<T> Outcome<T> {
    pub fn payload(&self) -> &T {
        match self {
            Outcome::Generated(p) | Outcome::Empty(p) => p,
            Outcome::Failed { sentinel, .. } => sentinel,
        }
    }

    pub fn into_payload(self) -> T {
        match self {
            Outcome::Generated(p) | Outcome::Empty(p) => p,
            Outcome::Failed { sentinel, .. } => sentinel,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }

    pub fn error(&self) -> Option<&GeminiError> {
        match self {
            Outcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// A text-generation backend used by the chat endpoints.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logs and health checks.
    fn model_name(&self) -> &str;

    /// Generate a reply and split it into sections.
    async fn generate_structured_response(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Outcome<StructuredReply>;

    /// Generate a translation with a bounded output length.
    async fn generate_translation(&self, prompt: &str) -> Outcome<String>;
}
