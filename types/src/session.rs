use crate::content::message::MessageRole;

/// One message exchanged in the conversation, attributed to user or
/// assistant. Retained for display only; never persisted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ConversationTurn {
    role: MessageRole,

    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<Vec<u8>>,
}

impl ConversationTurn {
    pub fn new(role: MessageRole, text: Option<String>, audio: Option<Vec<u8>>) -> Self {
        Self { role, text, audio }
    }

    pub fn role(&self) -> MessageRole {
        self.role.clone()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn audio(&self) -> Option<&[u8]> {
        self.audio.as_deref()
    }
}

/// Conversation state for one user session: the ordered turn log plus the
/// last raw API reply for the debug view. Passed explicitly into each
/// exchange; only the active turn-processing flow ever appends, so there
/// is no locking.
#[derive(Debug, Default)]
pub struct Session {
    turns: Vec<ConversationTurn>,
    last_raw_response: Option<serde_json::Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_turn(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn record_raw_response(&mut self, raw: serde_json::Value) {
        self.last_raw_response = Some(raw);
    }

    pub fn last_raw_response(&self) -> Option<&serde_json::Value> {
        self.last_raw_response.as_ref()
    }
}
