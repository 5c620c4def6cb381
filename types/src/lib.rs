pub mod audio;
pub mod chat;
pub mod session;
mod content;

pub use chat::{ChatRequest, ChatResponse, Choice, ResponseMessage};
pub use content::message::{ChatMessage, ChatMessageBuilder, MessageRole};
pub use content::parts::{InputContent, OutputContent, TextContent};
pub use session::{ConversationTurn, Session};
