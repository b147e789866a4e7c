//! Wire format for the generate-content endpoint.
//!
//! Transport-free so the browser build can encode requests and decode
//! replies around its own `fetch`.

use crate::error::AssistError;
use serde::{Deserialize, Serialize};

/// Longest slice of an error body kept in `AssistError::Status`.
const STATUS_DETAIL_CHARS: usize = 200;

#[derive(Debug, Serialize, PartialEq)]
pub struct GenerateRequest<'a> {
    pub contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RequestContent<'a> {
    pub parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(self) -> Result<String, AssistError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AssistError::ResponseShape("no candidates".into()))?;
        candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| AssistError::ResponseShape("candidate has no text part".into()))
    }
}

/// Decode a success body into generated text.
pub fn parse_response(body: &[u8]) -> Result<String, AssistError> {
    serde_json::from_slice::<GenerateResponse>(body)
        .map_err(|e| AssistError::ResponseShape(e.to_string()))?
        .first_text()
}

/// Decode a complete HTTP reply: non-2xx becomes `Status`, anything else
/// goes through [`parse_response`].
pub fn decode_reply(status: u16, body: &[u8]) -> Result<String, AssistError> {
    if !(200..300).contains(&status) {
        let detail: String = String::from_utf8_lossy(body)
            .chars()
            .take(STATUS_DETAIL_CHARS)
            .collect();
        return Err(AssistError::Status { status, detail });
    }
    parse_response(body)
}
