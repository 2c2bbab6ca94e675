use serde::Serialize;

use super::Provider;

pub const GREETING: &str =
    "Hello! I am your IPL AI Assistant. Ask me anything about teams, players, stats, or history!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Provider that produced an assistant turn. `None` for user turns and
    /// the greeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Append-only chat history. Turns are never removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript opened by the assistant's greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(Role::Assistant, GREETING.to_string(), None);
        transcript
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into(), None);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, provider: Provider) {
        self.push(Role::Assistant, content.into(), Some(provider));
    }

    fn push(&mut self, role: Role, content: String, provider: Option<Provider>) {
        self.turns.push(Turn {
            role,
            content,
            provider,
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
