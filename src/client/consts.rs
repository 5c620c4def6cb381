pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";

pub const BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_MODEL: &str = "voxtral-mini-2507";

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
