//! Chat session state machine.
//!
//! One outstanding request at a time: a submission while Waiting is
//! rejected, not queued. The transport call happens between [`ChatSession::submit`]
//! and [`ChatSession::complete`] / [`ChatSession::fail`], so the machine
//! itself never touches the network and tests run without one.

use serde_json::{json, Value};
use uuid::Uuid;
use vigil_common::chat::{parse_bot_reply, ChatTurn, Sender, FALLBACK_BOT_MESSAGE};
use vigil_common::resolver::resolve_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Waiting,
}

pub struct ChatSession {
    session_id: Uuid,
    agent: String,
    state: SessionState,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            agent: agent.into(),
            state: SessionState::Idle,
            turns: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Most recent completed (user, bot) exchange, for minimal context
    /// carryover.
    fn last_exchange(&self) -> Option<(&ChatTurn, &ChatTurn)> {
        let bot_idx = self.turns.iter().rposition(|t| t.sender == Sender::Bot)?;
        let user = self.turns[..bot_idx]
            .iter()
            .rev()
            .find(|t| t.sender == Sender::User)?;
        Some((user, &self.turns[bot_idx]))
    }

    /// Begin an exchange. Returns the request payload to send, or
    /// `None` when a request is already in flight or the input is blank
    /// (the turn list is left untouched either way).
    pub fn submit(&mut self, text: &str) -> Option<Value> {
        if self.state == SessionState::Waiting {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut options = json!({ "session": self.session_id.to_string() });
        if let Some((user, bot)) = self.last_exchange() {
            options["history"] = json!([
                { "sender": "user", "text": user.text },
                { "sender": "bot", "text": bot.text },
            ]);
        }

        let payload = json!({
            "agent": self.agent,
            "params": [ { "name": "userInput", "value": text } ],
            "options": options,
        });

        self.turns.push(ChatTurn::user(text));
        self.state = SessionState::Waiting;
        Some(payload)
    }

    /// Record a successful backend reply. Resolves the display text
    /// from the raw envelope, then attempts the secondary
    /// `{response, suspicious}` parse; a reply that is not JSON stays
    /// plain text and is not suspicious.
    pub fn complete(&mut self, envelope: &Value) -> ChatTurn {
        let resolved = resolve_text(envelope);
        let turn = match parse_bot_reply(&resolved) {
            Some(reply) => ChatTurn::bot(reply.response, reply.suspicious),
            None => ChatTurn::bot(resolved, false),
        };
        self.turns.push(turn.clone());
        self.state = SessionState::Idle;
        turn
    }

    /// Record a failed exchange: fixed fallback reply, back to Idle.
    /// No retry is attempted.
    pub fn fail(&mut self) -> ChatTurn {
        let turn = ChatTurn::bot(FALLBACK_BOT_MESSAGE, false);
        self.turns.push(turn.clone());
        self.state = SessionState::Idle;
        turn
    }
}
