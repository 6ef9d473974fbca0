//! Shared domain types: the structured reply document and chat personas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A model reply split into a summary and titled sections.
///
/// Serialized as-is for the `reply` field of the chat endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl StructuredReply {
    /// A reply with only a summary line and no sections.
    pub fn sentinel(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            sections: Vec::new(),
        }
    }
}

/// A titled block of content items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

/// One entry inside a section. Without a sub-heading it is a plain line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub subheading: Option<String>,
    pub text: String,
}

impl ContentItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            subheading: None,
            text: text.into(),
        }
    }

    pub fn with_subheading(subheading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            subheading: Some(subheading.into()),
            text: text.into(),
        }
    }
}

/// The chat behaviours exposed by the API, one endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    /// General civic assistant (`/api/chat`).
    General,
    /// LawBot, legal information (`/api/lawbot`).
    Legal,
    /// Talk2Gov, government services (`/api/talk2gov`).
    Government,
    /// Local language assistant (`/api/translate`).
    Translator,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::General,
        Persona::Legal,
        Persona::Government,
        Persona::Translator,
    ];

    /// Short identifier, also used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Persona::General => "chat",
            Persona::Legal => "lawbot",
            Persona::Government => "talk2gov",
            Persona::Translator => "translate",
        }
    }

    /// Request path of the endpoint serving this persona.
    pub const fn path(self) -> &'static str {
        match self {
            Persona::General => "/api/chat",
            Persona::Legal => "/api/lawbot",
            Persona::Government => "/api/talk2gov",
            Persona::Translator => "/api/translate",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Persona::General => "CivicConnect AI",
            Persona::Legal => "LawBot",
            Persona::Government => "Talk2Gov",
            Persona::Translator => "Local Language Assistant",
        }
    }

    /// Whether replies are structured documents rather than plain text.
    pub const fn is_structured(self) -> bool {
        !matches!(self, Persona::Translator)
    }

    /// Opening bot message shown at the start of every chat.
    pub const fn greeting(self) -> &'static str {
        match self {
            Persona::General => {
                "Hello! I'm CivicConnect AI 🤖. Ask me about your rights, public services or civic procedures."
            }
            Persona::Legal => {
                "Hello! I'm LawBot ⚖️. I now provide accurate legal information from verified sources. How can I help you today?"
            }
            Persona::Government => {
                "Hello! I'm Talk2Gov 🏛️. Ask me about government schemes, documents and how to apply for them."
            }
            Persona::Translator => {
                "Hello! I'm your Local Language Assistant 🌐. Type a message and I'll translate it for you."
            }
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown persona name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" | "general" => Ok(Persona::General),
            "lawbot" | "legal" => Ok(Persona::Legal),
            "talk2gov" | "gov" | "government" => Ok(Persona::Government),
            "translate" | "translator" => Ok(Persona::Translator),
            other => Err(UnknownPersona(other.to_string())),
        }
    }
}
