//! Design assistant proxy.
//!
//! Forwards chat questions and design text to a generative-language
//! endpoint. Failures never propagate past the panels: chat falls back to
//! a canned reply, refinement keeps what it had.
//!
//! The HTTP transport sits behind the default `http` feature. Without it
//! the crate still provides the codec and panel state, so a browser host
//! can run the request itself and feed the reply back through
//! [`decode_reply`].

pub mod chat;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod prompts;
pub mod suggest;

pub use chat::{ChatMessage, ChatPanel, FALLBACK_REPLY, GREETING, Role};
#[cfg(feature = "http")]
pub use client::GeminiClient;
pub use client::TextGenerator;
pub use codec::{GenerateRequest, decode_reply, parse_response};
pub use config::AssistantConfig;
pub use error::AssistError;
pub use suggest::{MAX_SUGGESTIONS, SuggestionPanel, parse_suggestions};
