//! Gemini configuration resolution.
//!
//! Settings come from environment variables (a `.env` file is loaded by the
//! binaries before this runs).

use std::env;

use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";

/// Output cap for translations.
pub const TRANSLATION_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Resolved configuration for the Gemini API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. `None` when unset or blank.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// API base URL without a trailing slash.
    pub api_base: String,
}

impl GeminiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                                         |
    /// |-------------------|-------------------------------------------------|
    /// | `GEMINI_API_KEY`  | none                                            |
    /// | `MODEL_NAME`      | `gemini-2.5-flash`                              |
    /// | `GEMINI_API_BASE` | `https://generativelanguage.googleapis.com/v1`  |
    pub fn from_env() -> Self {
        Self::new(
            env::var("GEMINI_API_KEY").ok(),
            env::var("MODEL_NAME").ok(),
            env::var("GEMINI_API_BASE").ok(),
        )
    }

    /// Builds a config, applying defaults and normalising blank values.
    pub fn new(api_key: Option<String>, model: Option<String>, api_base: Option<String>) -> Self {
        let non_blank = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            api_key: non_blank(api_key),
            model: non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_blank(api_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Replaces the model name, keeping the rest.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Sampling parameters sent as `generationConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.7,
            max_output_tokens: None,
        }
    }
}

impl GenerationParams {
    /// Parameters for translations: defaults plus an output cap.
    pub fn translation() -> Self {
        Self {
            max_output_tokens: Some(TRANSLATION_MAX_OUTPUT_TOKENS),
            ..Self::default()
        }
    }
}
