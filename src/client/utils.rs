use base64::Engine;

use crate::error::ExchangeError;
use crate::types::audio::{AudioClip, Base64EncodedAudioBytes};
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, ConversationTurn, MessageRole, OutputContent,
};

/// Base64-encodes a clip's raw bytes for JSON transport. No chunking, no
/// compression; the clip is done with once this returns.
pub fn encode(clip: &AudioClip) -> Base64EncodedAudioBytes {
    base64::engine::general_purpose::STANDARD.encode(clip.bytes())
}

/// Builds a single-user-turn request: exactly one audio content part, with
/// a text part appended second only when `text` is non-blank. Pure and
/// deterministic.
pub fn build_request(clip: &AudioClip, text: Option<&str>, model: &str) -> ChatRequest {
    let mut message = ChatMessage::builder()
        .with_role(MessageRole::User)
        .with_input_audio(encode(clip), clip.format());

    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        message = message.with_text(text);
    }

    ChatRequest::new(model, vec![message.build()])
}

/// Decodes a reply into one assistant turn. Content parts are walked in
/// order: the last text part wins, the last audio part wins. The API makes
/// no guarantee about part counts, so both slots may stay empty.
pub fn parse_turn(response: &ChatResponse) -> Result<ConversationTurn, ExchangeError> {
    let choice = response.choices().first().ok_or_else(|| {
        ExchangeError::MalformedResponse("response contains no choices".to_string())
    })?;

    let mut text = None;
    let mut audio = None;
    for part in choice.message().content() {
        match part {
            OutputContent::Text(t) => text = Some(t.text()),
            OutputContent::OutputAudio(a) => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(a.data())
                    .map_err(|e| {
                        ExchangeError::MalformedResponse(format!("undecodable audio part: {e}"))
                    })?;
                audio = Some(bytes);
            }
            OutputContent::Unknown => {}
        }
    }

    Ok(ConversationTurn::new(MessageRole::Assistant, text, audio))
}
