// crates/revoice-core/src/prompt.rs

use serde::{Deserialize, Serialize};

/// Hard cap on prompt length, in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Suggestion chips shown under the prompt field; clicking one replaces the
/// current text.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Add epic cinematic music",
    "Create a dramatic intro",
    "Add futuristic sound effects",
    "Make it sound vintage",
    "Add nature ambience",
];

/// Bounded free text describing the requested enhancement.
///
/// Invariant: `text.chars().count() <= MAX_PROMPT_CHARS` at all times.
/// Writes beyond the bound truncate rather than erroring.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, truncating to MAX_PROMPT_CHARS characters.
    /// Always succeeds. Truncation lands on a char boundary, never mid-codepoint.
    pub fn set_text(&mut self, s: impl Into<String>) {
        let s = s.into();
        self.text = match s.char_indices().nth(MAX_PROMPT_CHARS) {
            Some((byte_idx, _)) => s[..byte_idx].to_string(),
            None => s,
        };
    }

    /// Characters still available before the cap. Display-only.
    pub fn remaining_chars(&self) -> usize {
        MAX_PROMPT_CHARS - self.text.chars().count()
    }

    /// True when the trimmed text is empty — the prompt validation check.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_stored_verbatim() {
        let mut p = Prompt::default();
        p.set_text("add rain sounds");
        assert_eq!(p.text(), "add rain sounds");
        assert_eq!(p.remaining_chars(), MAX_PROMPT_CHARS - 15);
    }

    #[test]
    fn overlong_text_truncates_to_first_500_chars() {
        let long: String = std::iter::repeat('x').take(800).collect();
        let mut p = Prompt::default();
        p.set_text(long.clone());
        assert_eq!(p.text(), &long[..MAX_PROMPT_CHARS]);
        assert_eq!(p.remaining_chars(), 0);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 600 two-byte chars: byte index 500 would split a codepoint.
        let long: String = std::iter::repeat('é').take(600).collect();
        let mut p = Prompt::default();
        p.set_text(long);
        assert_eq!(p.text().chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn exactly_at_cap_is_kept_whole() {
        let exact: String = std::iter::repeat('a').take(MAX_PROMPT_CHARS).collect();
        let mut p = Prompt::default();
        p.set_text(exact.clone());
        assert_eq!(p.text(), exact);
        assert_eq!(p.remaining_chars(), 0);
    }

    #[test]
    fn whitespace_only_is_blank() {
        let mut p = Prompt::default();
        assert!(p.is_blank());
        p.set_text("   \t\n ");
        assert!(p.is_blank());
        p.set_text("  ok  ");
        assert!(!p.is_blank());
    }
}
