//! Plain-text rendering of chat messages for the terminal.

use civic_core::models::Persona;

use crate::session::{ChatMessage, DisplayItem, MessageBody, Role};

const RULE: &str = "────────────────────────────────────────";

/// Renders one message as it should appear in the transcript.
pub fn render_message(persona: Persona, message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "You",
        Role::Bot => persona.display_name(),
    };
    let body = match &message.body {
        MessageBody::Text(text) => text.clone(),
        MessageBody::Structured(items) => items
            .iter()
            .map(render_item)
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    format!("{speaker}:\n{body}")
}

fn render_item(item: &DisplayItem) -> String {
    match item {
        DisplayItem::Summary(text) => format!("Summary: {text}"),
        DisplayItem::Text(text) => text.clone(),
        DisplayItem::Section { title, content } => {
            let mut lines = vec![title.to_uppercase()];
            lines.extend(content.iter().map(|c| match &c.subheading {
                Some(sub) => format!("{sub}: {}", c.text),
                None => c.text.clone(),
            }));
            lines.push(RULE.to_string());
            lines.join("\n")
        }
    }
}
