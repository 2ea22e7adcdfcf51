use serde::Serialize;

pub const GREETING: &str =
    "Hi! I'm your tax assistant. Ask me anything about taxes, savings, or documentation requirements!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only message log for one chat session.
///
/// Messages are only ever added as a user question followed by exactly one
/// assistant reply, and `with_exchange` returns a new log rather than
/// modifying this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// New conversation opened by the assistant greeting
    pub fn seeded() -> Self {
        Conversation {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn with_exchange(&self, question: &str, reply: &str) -> Conversation {
        let mut messages = Vec::with_capacity(self.messages.len() + 2);
        messages.extend_from_slice(&self.messages);
        messages.push(Message::user(question));
        messages.push(Message::assistant(reply));
        Conversation { messages }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::seeded()
    }
}
