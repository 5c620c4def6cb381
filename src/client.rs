use secrecy::ExposeSecret;

use crate::error::ExchangeError;
use crate::types::audio::AudioClip;
use crate::types::{ChatRequest, ChatResponse, ConversationTurn, MessageRole, Session};

mod config;
mod consts;
mod utils;

pub use config::{Config, ConfigBuilder};
pub use utils::{build_request, encode, parse_turn};

/// The exchange client: one instance per configured endpoint, shareable
/// across turns. Holds no conversation state of its own; that lives in the
/// `Session` passed into each call.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the single-turn request for a clip using the configured model.
    pub fn build_request(&self, clip: &AudioClip, text: Option<&str>) -> ChatRequest {
        utils::build_request(clip, text, self.config.model())
    }

    /// One POST against the chat-completions endpoint, bounded by the
    /// configured timeout. No retry: a failure is reported and the caller
    /// decides whether to try again.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ExchangeError> {
        let raw = self.post_chat(request).await?;
        serde_json::from_value(raw).map_err(|e| ExchangeError::MalformedResponse(e.to_string()))
    }

    /// The whole flow for one user action: encode, send, decode, and append
    /// both turns to the session. On failure the session log is left
    /// untouched and stays usable for the next attempt.
    pub async fn exchange(
        &self,
        session: &mut Session,
        clip: &AudioClip,
        text: Option<&str>,
    ) -> Result<ConversationTurn, ExchangeError> {
        if clip.is_empty() {
            return Err(ExchangeError::EmptyInput);
        }

        let request = self.build_request(clip, text);
        let raw = self.post_chat(&request).await?;
        let response: ChatResponse = serde_json::from_value(raw.clone())
            .map_err(|e| ExchangeError::MalformedResponse(e.to_string()))?;
        let turn = utils::parse_turn(&response)?;

        session.push_turn(ConversationTurn::new(
            MessageRole::User,
            text.filter(|t| !t.trim().is_empty()).map(str::to_string),
            None,
        ));
        session.record_raw_response(raw);
        session.push_turn(turn.clone());

        Ok(turn)
    }

    async fn post_chat(&self, request: &ChatRequest) -> Result<serde_json::Value, ExchangeError> {
        if self.config.api_key().expose_secret().is_empty() {
            return Err(ExchangeError::MissingCredential);
        }

        let url = format!("{}{}", self.config.base_url(), consts::CHAT_COMPLETIONS_PATH);
        tracing::debug!("POST {}, model={}", url, self.config.model());

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.api_key().expose_secret())
            .timeout(self.config.timeout())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            tracing::warn!("chat completion failed: {} - {}", status, body);
            return Err(ExchangeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("chat completion ok, {} bytes", body.len());
        serde_json::from_str(&body).map_err(|e| ExchangeError::MalformedResponse(e.to_string()))
    }

    fn classify(&self, e: reqwest::Error) -> ExchangeError {
        if e.is_timeout() {
            return ExchangeError::Timeout(self.config.timeout());
        }
        if e.is_connect() {
            return ExchangeError::Network(format!("connection error: {e}"));
        }
        ExchangeError::Network(format!("failed to send request: {e}"))
    }
}
