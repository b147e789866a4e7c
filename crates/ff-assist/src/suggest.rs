//! Text refinement: ask for alternative phrasings and keep up to three.

use crate::client::TextGenerator;
use crate::error::AssistError;
use crate::prompts::refine_prompt;
use smallvec::SmallVec;

pub const MAX_SUGGESTIONS: usize = 3;

pub type Suggestions = SmallVec<[String; MAX_SUGGESTIONS]>;

/// Split a newline-delimited reply into at most three trimmed, non-empty
/// lines. Never pads.
pub fn parse_suggestions(text: &str) -> Suggestions {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionPanel {
    suggestions: Suggestions,
    in_flight: usize,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a refinement and return the prompt. Blank text is ignored.
    pub fn request(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.in_flight += 1;
        Some(refine_prompt(text.trim()))
    }

    /// Apply a reply. On failure the previous suggestions stay.
    pub fn resolve(&mut self, result: Result<String, AssistError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(text) => self.suggestions = parse_suggestions(&text),
            Err(e) => log::warn!("refinement failed, keeping previous suggestions: {e}"),
        }
    }

    pub async fn refine<G: TextGenerator>(&mut self, generator: &G, text: &str) {
        let Some(prompt) = self.request(text) else {
            return;
        };
        let result = generator.generate(&prompt).await;
        self.resolve(result);
    }

    /// Take the chosen suggestion and close the list.
    pub fn pick(&mut self, index: usize) -> Option<String> {
        if index >= self.suggestions.len() {
            return None;
        }
        let chosen = self.suggestions.swap_remove(index);
        self.suggestions.clear();
        Some(chosen)
    }

    pub fn dismiss(&mut self) {
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_trimmed_and_capped() {
        let parsed = parse_suggestions("  One \n\n Two\nThree\nFour\n");
        assert_eq!(parsed.as_slice(), ["One", "Two", "Three"]);
    }

    #[test]
    fn never_padded() {
        assert_eq!(parse_suggestions("Only one").len(), 1);
        assert!(parse_suggestions("\n \n").is_empty());
    }

    #[test]
    fn crlf_handled() {
        assert_eq!(parse_suggestions("a\r\nb\r\n").as_slice(), ["a", "b"]);
    }

    #[test]
    fn failure_keeps_previous() {
        let mut panel = SuggestionPanel::new();
        panel.request("Team Tigers");
        panel.resolve(Ok("A\nB".into()));
        panel.request("Team Tigers");
        assert!(panel.loading());
        panel.resolve(Err(AssistError::ResponseShape("empty".into())));
        assert!(!panel.loading());
        assert_eq!(panel.suggestions(), ["A", "B"]);
    }

    #[test]
    fn pick_clears_list() {
        let mut panel = SuggestionPanel::new();
        panel.request("x");
        panel.resolve(Ok("A\nB\nC".into()));
        assert_eq!(panel.pick(5), None);
        assert_eq!(panel.pick(1), Some("B".to_string()));
        assert!(panel.suggestions().is_empty());
    }

    #[test]
    fn blank_request_ignored() {
        let mut panel = SuggestionPanel::new();
        assert_eq!(panel.request("  "), None);
        assert!(!panel.loading());
    }
}
