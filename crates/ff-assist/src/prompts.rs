//! Prompt templates for assistant calls.

/// Wraps a free-form chat question.
pub const CHAT_PROMPT: &str = "You are a helpful fashion design assistant for a custom garment studio. \
Answer the following question about fashion design concisely, with practical advice on sizing, \
fabrics, printing, or design: ";

/// Asks for alternative phrasings of design or note text.
pub const REFINE_PROMPT: &str = "Suggest exactly three alternative phrasings of the following text \
for use on a custom garment. Return one phrasing per line, with no numbering, bullets, quotes, or \
extra commentary.\n\nText: ";

pub fn chat_prompt(message: &str) -> String {
    format!("{CHAT_PROMPT}{message}")
}

pub fn refine_prompt(text: &str) -> String {
    format!("{REFINE_PROMPT}{text}")
}
