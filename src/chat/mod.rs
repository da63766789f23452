//! Chat transcript controller
//!
//! Owns one session's append-only transcript and the single in-flight turn.
//!
//! ```text
//! Idle --submit(text)--> Awaiting --dispatch--> (request in flight)
//!   ^                                            |
//!   +------ resolve(Ok: reply | Err: fallback) --+
//! ```
//!
//! A failed request is folded straight back to Idle after a canned fallback
//! reply is appended; the error itself is only logged.

pub mod backend;

pub use backend::{ChatBackend, ChatError, ChatReply};

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;

use crate::advisor::pick_uniform;

pub const GREETING: &str = "Hello! I'm your Smart Farming Assistant. How can I help you today? You can ask me about crops, weather, soil conditions, pest management, or any farming-related questions.";

/// Used when the backend answers without a `response` field
pub const DEFAULT_REPLY: &str = "I understand your question about farming. Let me provide you with some helpful information based on best agricultural practices.";

pub const FALLBACK_REPLIES: [&str; 4] = [
    "Based on current agricultural best practices, I recommend focusing on soil health first. Regular soil testing helps determine nutrient needs.",
    "For sustainable farming, consider crop rotation, cover crops, and integrated pest management techniques.",
    "Weather patterns are crucial for farming decisions. Monitor local weather forecasts and consider climate trends for your region.",
    "Organic farming methods can improve soil health and reduce chemical inputs. Consider composting and natural fertilizers.",
];

pub const QUICK_PROMPTS: [&str; 5] = [
    "What crops should I plant this season?",
    "How do I improve my soil quality?",
    "What are the signs of plant diseases?",
    "When is the best time to harvest?",
    "How to manage pests organically?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local clock time shown under the bubble
    pub fn time_display(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Awaiting,
}

/// The outbound request for one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub turn: u64,
    pub message: String,
}

#[derive(Debug)]
enum Phase {
    Idle,
    /// `outbound` is taken by `dispatch`, so each turn sends exactly once
    Awaiting { turn: u64, outbound: Option<String> },
}

pub struct ChatController {
    messages: Vec<ChatMessage>,
    phase: Phase,
    next_id: u64,
    next_turn: u64,
    rng: Box<dyn RngCore + Send>,
}

impl ChatController {
    /// New transcript holding only the assistant greeting
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        let mut controller = Self {
            messages: Vec::new(),
            phase: Phase::Idle,
            next_id: 1,
            next_turn: 1,
            rng: Box::new(rng),
        };
        controller.push(Sender::Ai, GREETING.to_string());
        controller
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        match self.phase {
            Phase::Idle => ChatState::Idle,
            Phase::Awaiting { .. } => ChatState::Awaiting,
        }
    }

    pub fn is_awaiting(&self) -> bool {
        self.state() == ChatState::Awaiting
    }

    /// Awaiting, and the request has not been handed out yet
    pub fn has_undispatched_turn(&self) -> bool {
        matches!(self.phase, Phase::Awaiting { outbound: Some(_), .. })
    }

    /// Append the user's message and start a turn.
    ///
    /// Returns false, changing nothing, for blank text or while a turn is
    /// already awaiting its reply.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if self.is_awaiting() {
            tracing::debug!("Rejecting chat submit while a reply is pending");
            return false;
        }

        self.push(Sender::User, text.to_string());
        let turn = self.next_turn;
        self.next_turn += 1;
        self.phase = Phase::Awaiting {
            turn,
            outbound: Some(text.to_string()),
        };
        true
    }

    /// Hand out the pending turn's request, once
    pub fn dispatch(&mut self) -> Option<PendingTurn> {
        match &mut self.phase {
            Phase::Awaiting { turn, outbound } => outbound.take().map(|message| PendingTurn {
                turn: *turn,
                message,
            }),
            Phase::Idle => None,
        }
    }

    /// Submit and dispatch in one step
    pub fn begin_turn(&mut self, text: &str) -> Option<PendingTurn> {
        if self.submit(text) {
            self.dispatch()
        } else {
            None
        }
    }

    /// Finish the turn with the backend outcome.
    ///
    /// A stale turn (not the one awaiting) is ignored and returns `None`.
    pub fn resolve(
        &mut self,
        turn: u64,
        outcome: Result<ChatReply, ChatError>,
    ) -> Option<&ChatMessage> {
        match self.phase {
            Phase::Awaiting { turn: pending, .. } if pending == turn => {}
            _ => {
                tracing::debug!("Ignoring reply for stale turn {}", turn);
                return None;
            }
        }

        let text = match outcome {
            Ok(reply) => reply
                .response
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REPLY.to_string()),
            Err(e) => {
                tracing::warn!("Chat backend unavailable, using fallback reply: {}", e);
                pick_uniform(&FALLBACK_REPLIES, &mut *self.rng)
                    .copied()
                    .unwrap_or(FALLBACK_REPLIES[0])
                    .to_string()
            }
        };

        self.phase = Phase::Idle;
        Some(self.push(Sender::Ai, text))
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller() -> ChatController {
        ChatController::new(StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_starts_idle_with_greeting() {
        let c = controller();
        assert_eq!(c.state(), ChatState::Idle);
        assert_eq!(c.messages().len(), 1);
        assert_eq!(c.messages()[0].sender, Sender::Ai);
        assert_eq!(c.messages()[0].text, GREETING);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut c = controller();
        assert!(!c.submit("  "));
        assert!(!c.submit(""));
        assert!(!c.submit("\t\n"));
        assert_eq!(c.messages().len(), 1);
        assert_eq!(c.state(), ChatState::Idle);
        assert!(c.dispatch().is_none());
    }

    #[test]
    fn test_submit_appends_user_message_and_awaits() {
        let mut c = controller();
        assert!(c.submit("hello"));
        assert_eq!(c.messages().len(), 2);
        let last = c.messages().last().unwrap();
        assert_eq!(last.text, "hello");
        assert_eq!(last.sender, Sender::User);
        assert_eq!(c.state(), ChatState::Awaiting);
    }

    #[test]
    fn test_failure_appends_one_fallback_and_returns_idle() {
        let mut c = controller();
        let pending = c.begin_turn("hello").unwrap();
        assert_eq!(pending.message, "hello");

        let reply = c.resolve(pending.turn, Err(ChatError::Status(503))).unwrap();
        assert_eq!(reply.sender, Sender::Ai);
        assert!(FALLBACK_REPLIES.contains(&reply.text.as_str()));

        assert_eq!(c.messages().len(), 3);
        assert_eq!(c.state(), ChatState::Idle);
        assert_eq!(c.messages()[1].sender, Sender::User);
    }

    #[test]
    fn test_success_uses_response_or_default() {
        let mut c = controller();
        let turn = c.begin_turn("what about rice?").unwrap().turn;
        let reply = c
            .resolve(turn, Ok(ChatReply { response: Some("Plant in June.".into()) }))
            .unwrap();
        assert_eq!(reply.text, "Plant in June.");

        let turn = c.begin_turn("and wheat?").unwrap().turn;
        let reply = c.resolve(turn, Ok(ChatReply { response: None })).unwrap();
        assert_eq!(reply.text, DEFAULT_REPLY);
        assert_eq!(c.messages().len(), 5);
    }

    #[test]
    fn test_only_empty_response_falls_back_to_default() {
        let mut c = controller();
        let turn = c.begin_turn("hello").unwrap().turn;
        let reply = c.resolve(turn, Ok(ChatReply { response: Some(String::new()) })).unwrap();
        assert_eq!(reply.text, DEFAULT_REPLY);

        let turn = c.begin_turn("again").unwrap().turn;
        let reply = c.resolve(turn, Ok(ChatReply { response: Some("  ".into()) })).unwrap();
        assert_eq!(reply.text, "  ");
    }

    #[test]
    fn test_submit_rejected_while_awaiting() {
        let mut c = controller();
        assert!(c.submit("first"));
        assert!(!c.submit("second"));
        assert_eq!(c.messages().len(), 2);
    }

    #[test]
    fn test_dispatch_hands_out_request_once() {
        let mut c = controller();
        c.submit("hello");
        assert!(c.has_undispatched_turn());
        assert!(c.dispatch().is_some());
        assert!(!c.has_undispatched_turn());
        assert!(c.dispatch().is_none());
        assert_eq!(c.state(), ChatState::Awaiting);
    }

    #[test]
    fn test_stale_resolve_is_noop() {
        let mut c = controller();
        let first = c.begin_turn("one").unwrap().turn;
        c.resolve(first, Ok(ChatReply::default()));

        let len = c.messages().len();
        assert!(c.resolve(first, Ok(ChatReply::default())).is_none());
        assert!(c.resolve(42, Err(ChatError::Status(500))).is_none());
        assert_eq!(c.messages().len(), len);
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let mut c = controller();
        for text in ["a", "b", "c"] {
            let turn = c.begin_turn(text).unwrap().turn;
            c.resolve(turn, Err(ChatError::Status(500)));
        }
        let ids: Vec<u64> = c.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<u64>>());

        // each user message is followed by its reply
        for pair in c.messages()[1..].chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Ai);
        }
    }

    #[test]
    fn test_fallback_pick_follows_seed() {
        let run = |seed: u64| {
            let mut c = ChatController::new(StdRng::seed_from_u64(seed));
            let turn = c.begin_turn("hi").unwrap().turn;
            let reply = c.resolve(turn, Err(ChatError::Status(502))).unwrap().text.clone();
            reply
        };
        assert_eq!(run(11), run(11));
    }
}
