//! Gemini `generateContent` client.
//!
//! One POST per call, no retries, no timeout beyond the reqwest default.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::config::{GeminiConfig, GenerationParams};
use super::{
    GENERATION_FAILED_SUMMARY, GeminiError, LanguageModel, Outcome, TRANSLATION_FAILED,
    TRANSLATION_UNAVAILABLE,
};
use crate::models::StructuredReply;
use crate::structurer::{NO_RESPONSE_SUMMARY, structure_reply};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationParams,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Trimmed text of the first part of the first candidate, or empty.
    fn first_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }
}

/// HTTP client for one Gemini model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send `prompt` and return the trimmed first-candidate text.
    ///
    /// A successful response without text yields an empty string.
    pub async fn generate_text(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;

        debug!(model = %self.config.model, "sending request to Gemini API");

        let resp = self
            .client
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateRequest {
                contents: vec![RequestContent {
                    parts: vec![RequestPart { text: prompt }],
                }],
                generation_config: params,
            })
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(GeminiError::Status { status, body });
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.to_string()))?;

        debug!("Gemini API response received");
        Ok(data.first_text())
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate_structured_response(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Outcome<StructuredReply> {
        match self.generate_text(prompt, params).await {
            Ok(text) if text.is_empty() => {
                warn!("Gemini returned empty text");
                Outcome::Empty(StructuredReply::sentinel(NO_RESPONSE_SUMMARY))
            }
            Ok(text) => Outcome::Generated(structure_reply(&text)),
            Err(e) => {
                error!(error = %e, "Gemini API error");
                Outcome::Failed {
                    sentinel: StructuredReply::sentinel(GENERATION_FAILED_SUMMARY),
                    error: e,
                }
            }
        }
    }

    async fn generate_translation(&self, prompt: &str) -> Outcome<String> {
        match self
            .generate_text(prompt, GenerationParams::translation())
            .await
        {
            Ok(text) if text.is_empty() => {
                warn!("Gemini returned empty translation");
                Outcome::Empty(TRANSLATION_UNAVAILABLE.to_string())
            }
            Ok(text) => Outcome::Generated(text),
            Err(e) => {
                error!(error = %e, "Gemini translation API error");
                Outcome::Failed {
                    sentinel: TRANSLATION_FAILED.to_string(),
                    error: e,
                }
            }
        }
    }
}
