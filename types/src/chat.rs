use crate::content::message::ChatMessage;
use crate::content::parts::OutputContent;

/// The body POSTed to the chat-completions endpoint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(model: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.to_string(),
            messages,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// The body of an HTTP 200 reply. Only the fields the exchange flow reads
/// are modeled; everything else stays in the raw JSON kept on the session.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatResponse {
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Choice {
    message: ResponseMessage,
}

impl Choice {
    pub fn message(&self) -> &ResponseMessage {
        &self.message
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ResponseMessage {
    content: Vec<OutputContent>,
}

impl ResponseMessage {
    pub fn content(&self) -> &[OutputContent] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "id": "cmpl-1234",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": [
                            {"type": "text", "text": "You said hello."},
                            {"type": "output_audio", "audio": {"data": "AAEC"}}
                        ]
                    },
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices().len(), 1);
        let content = response.choices()[0].message().content();
        assert_eq!(content.len(), 2);
        assert!(matches!(content[0], OutputContent::Text(_)));
        assert!(matches!(content[1], OutputContent::OutputAudio(_)));
    }

    #[test]
    fn test_response_without_choices_is_rejected() {
        let err = serde_json::from_str::<ChatResponse>(r#"{"object":"chat.completion"}"#);
        assert!(err.is_err());
    }
}
