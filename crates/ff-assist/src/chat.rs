//! Chat panel state: message log, visibility, and in-flight tracking.

use crate::client::TextGenerator;
use crate::error::AssistError;
use crate::prompts::chat_prompt;
use serde::Serialize;

pub const GREETING: &str = "Hi! I'm your fashion design assistant. Ask me about sizing, fabric recommendations, or design tips!";

pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the design assistant right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Append-only chat log, seeded with a greeting.
///
/// Sending is split into `submit` (records the user message and returns
/// the prompt) and `resolve` (records the reply) so a host driving its own
/// event loop can observe `loading()` between the two. `send` does both.
#[derive(Debug, Clone)]
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    in_flight: usize,
    open: bool,
    minimized: bool,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            in_flight: 0,
            open: false,
            minimized: false,
        }
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing also restores the panel from minimised.
    pub fn close(&mut self) {
        self.open = false;
        self.minimized = false;
    }

    pub fn toggle_minimized(&mut self) {
        if self.open {
            self.minimized = !self.minimized;
        }
    }

    /// Record a user message and return the prompt to send.
    /// Blank input is ignored.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.in_flight += 1;
        Some(chat_prompt(text))
    }

    /// Record the outcome of a call started with `submit`.
    pub fn resolve(&mut self, result: Result<String, AssistError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let reply = match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("chat request failed: {e}");
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(reply));
    }

    pub async fn send<G: TextGenerator>(&mut self, generator: &G, text: &str) {
        let Some(prompt) = self.submit(text) else {
            return;
        };
        let result = generator.generate(&prompt).await;
        self.resolve(result);
    }
}
