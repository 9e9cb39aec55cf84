//! Chat turn types and the secondary reply parse.
//!
//! Turns live only in session memory; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Fixed reply shown when the chat backend cannot be reached.
pub const FALLBACK_BOT_MESSAGE: &str =
    "Sorry, I'm having trouble reaching the assistant right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One utterance in a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
    #[serde(default)]
    pub suspicious: bool,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            suspicious: false,
        }
    }

    pub fn bot(text: impl Into<String>, suspicious: bool) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            suspicious,
        }
    }
}

/// Structured reply some backends embed as a JSON-encoded string inside
/// the outer envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotReply {
    pub response: String,
    #[serde(default)]
    pub suspicious: bool,
}

/// Secondary parse of a resolved reply string. `None` when the string
/// is not a JSON object carrying a `response` field; callers then
/// display the string as-is and treat it as not suspicious.
pub fn parse_bot_reply(text: &str) -> Option<BotReply> {
    serde_json::from_str(text.trim()).ok()
}
