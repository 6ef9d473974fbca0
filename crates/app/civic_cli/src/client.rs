//! Blocking HTTP client for the CivicConnect API.

use civic_core::models::{Persona, StructuredReply};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::session::BotReply;
use crate::{Error, Result};

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    reply: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sends one message to a persona and returns its reply.
pub trait ChatBackend {
    fn send(&self, persona: Persona, message: &str, language: Option<&str>) -> Result<BotReply>;
}

pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }
}

impl ChatBackend for ApiClient {
    fn send(&self, persona: Persona, message: &str, language: Option<&str>) -> Result<BotReply> {
        let url = self.base.join(persona.path())?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(&OutgoingMessage { message, language })
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        if persona.is_structured() {
            let envelope: Envelope<StructuredReply> = serde_json::from_str(&body)?;
            Ok(BotReply::Structured(envelope.reply))
        } else {
            let envelope: Envelope<String> = serde_json::from_str(&body)?;
            Ok(BotReply::Text(envelope.reply))
        }
    }
}
