use crate::audio::{AudioFormat, Base64EncodedAudioBytes};
use crate::content::parts::InputContent;

/// A single message of a chat-completion request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The role of the message sender: "user", "assistant"
    role: MessageRole,

    /// The content of the message
    content: Vec<InputContent>,
}

impl ChatMessage {
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::new()
    }

    pub fn role(&self) -> MessageRole {
        self.role.clone()
    }

    pub fn content(&self) -> Vec<InputContent> {
        self.content.clone()
    }
}

pub struct ChatMessageBuilder {
    message: ChatMessage,
}

impl Default for ChatMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatMessageBuilder {
    pub fn new() -> Self {
        Self {
            message: ChatMessage {
                role: MessageRole::User,
                content: Vec::new(),
            },
        }
    }

    pub fn with_role(mut self, role: MessageRole) -> Self {
        self.message.role = role;
        self
    }

    pub fn with_input_audio(mut self, data: Base64EncodedAudioBytes, format: AudioFormat) -> Self {
        self.message.content.push(InputContent::input_audio(data, format));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.message.content.push(InputContent::text(text));
        self
    }

    pub fn build(self) -> ChatMessage {
        self.message
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub enum MessageRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}
