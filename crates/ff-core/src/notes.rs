//! Manufacturer notes, hard-capped at input time.

use serde::Serialize;

pub const NOTES_MAX_CHARS: usize = 500;

/// Free-text instructions for the manufacturer.
///
/// The cap is counted in `char`s and enforced on every write, so the stored
/// text never exceeds `NOTES_MAX_CHARS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NotesText(String);

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

impl NotesText {
    pub fn new(text: &str) -> Self {
        let mut notes = Self::default();
        notes.set(text);
        notes
    }

    /// Replace the text. Returns `true` if input was truncated.
    pub fn set(&mut self, text: &str) -> bool {
        let kept = truncate_chars(text, NOTES_MAX_CHARS);
        self.0 = kept.to_string();
        kept.len() < text.len()
    }

    /// Append as much of `text` as fits. Returns `true` if input was truncated.
    pub fn push_str(&mut self, text: &str) -> bool {
        let kept = truncate_chars(text, self.remaining());
        self.0.push_str(kept);
        kept.len() < text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn remaining(&self) -> usize {
        NOTES_MAX_CHARS.saturating_sub(self.len())
    }

    /// Counter label, e.g. `42/500 characters`.
    pub fn counter_label(&self) -> String {
        format!("{}/{NOTES_MAX_CHARS} characters", self.len())
    }

    /// First `max` characters, with `...` when cut.
    pub fn preview(&self, max: usize) -> String {
        let head = truncate_chars(&self.0, max);
        if head.len() < self.0.len() {
            format!("{head}...")
        } else {
            head.to_string()
        }
    }
}
