//! Chat session: the ordered list of messages shown to the user.

use civic_core::models::{ContentItem, Persona, StructuredReply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One block of a bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Summary(String),
    Section {
        title: String,
        content: Vec<ContentItem>,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Structured(Vec<DisplayItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn bot_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            body: MessageBody::Structured(vec![DisplayItem::Text(text.into())]),
        }
    }
}

/// What the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    Structured(StructuredReply),
    Text(String),
}

/// Display blocks for a structured reply: the summary, if any, then one
/// block per section.
pub fn display_items(reply: &StructuredReply) -> Vec<DisplayItem> {
    let summary = (!reply.summary.is_empty()).then(|| DisplayItem::Summary(reply.summary.clone()));
    summary
        .into_iter()
        .chain(reply.sections.iter().map(|section| DisplayItem::Section {
            title: section.title.clone(),
            content: section.content.clone(),
        }))
        .collect()
}

/// Messages exchanged with one persona. Lives only as long as the process.
#[derive(Debug, Clone)]
pub struct ChatSession {
    persona: Persona,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            messages: vec![ChatMessage::bot_text(persona.greeting())],
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Drops the history, leaving only the greeting.
    pub fn new_chat(&mut self) {
        self.messages = vec![ChatMessage::bot_text(self.persona.greeting())];
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_reply(&mut self, reply: &BotReply) {
        let items = match reply {
            BotReply::Structured(reply) => display_items(reply),
            BotReply::Text(text) => vec![DisplayItem::Text(text.clone())],
        };
        self.messages.push(ChatMessage {
            role: Role::Bot,
            body: MessageBody::Structured(items),
        });
    }

    /// Records that the server could not be reached.
    pub fn push_connection_error(&mut self) {
        let text = format!(
            "❌ Error connecting to {} server.",
            self.persona.display_name()
        );
        self.messages.push(ChatMessage::bot_text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::models::Section;

    fn reply() -> StructuredReply {
        StructuredReply {
            summary: "Must be 18+".into(),
            sections: vec![Section {
                title: "Eligibility".into(),
                content: vec![ContentItem::plain("Must be 18+")],
            }],
        }
    }

    #[test]
    fn session_starts_with_greeting() {
        let session = ChatSession::new(Persona::Legal);
        assert_eq!(
            session.messages(),
            &[ChatMessage::bot_text(Persona::Legal.greeting())]
        );
    }

    #[test]
    fn messages_keep_send_order() {
        let mut session = ChatSession::new(Persona::General);
        session.push_user("first");
        session.push_reply(&BotReply::Structured(reply()));
        session.push_user("second");

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Bot, Role::User, Role::Bot, Role::User]);
        assert_eq!(session.last(), Some(&ChatMessage::user("second")));
    }

    #[test]
    fn new_chat_resets_to_greeting() {
        let mut session = ChatSession::new(Persona::Government);
        session.push_user("hello");
        session.push_connection_error();
        session.new_chat();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(
            session.messages()[0],
            ChatMessage::bot_text(Persona::Government.greeting())
        );
    }

    #[test]
    fn structured_reply_becomes_summary_then_sections() {
        let items = display_items(&reply());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], DisplayItem::Summary("Must be 18+".into()));
        assert!(matches!(&items[1], DisplayItem::Section { title, .. } if title == "Eligibility"));
    }

    #[test]
    fn empty_summary_is_skipped() {
        let items = display_items(&StructuredReply::default());
        assert!(items.is_empty());
    }

    #[test]
    fn translation_reply_is_plain_text() {
        let mut session = ChatSession::new(Persona::Translator);
        session.push_reply(&BotReply::Text("नमस्ते".into()));
        assert_eq!(session.last(), Some(&ChatMessage::bot_text("नमस्ते")));
    }

    #[test]
    fn connection_error_names_the_persona() {
        let mut session = ChatSession::new(Persona::Legal);
        session.push_connection_error();
        assert_eq!(
            session.last(),
            Some(&ChatMessage::bot_text("❌ Error connecting to LawBot server."))
        );
    }
}
