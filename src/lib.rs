mod client;
mod error;

pub use voxtral_chat_types as types;

pub use client::{build_request, encode, parse_turn, Client, Config, ConfigBuilder};
pub use error::ExchangeError;

#[cfg(feature = "utils")]
pub use voxtral_chat_utils as utils;
