//! The mutable sentence being assembled
//!
//! All operations are total: deleting from or spacing an empty sentence is
//! a no-op, never an error. The trailing word is derived by whitespace
//! split on demand, never stored.

/// Growable text buffer holding the sentence under construction
#[derive(Debug, Default)]
pub struct SentenceBuffer {
    text: String,
}

impl SentenceBuffer {
    /// Create an empty sentence
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Unconditional character append
    pub fn append_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append a single space, only if non-empty and not already ending in one
    ///
    /// Returns whether a space was actually appended.
    pub fn append_space_if_needed(&mut self) -> bool {
        if self.text.is_empty() || self.text.ends_with(' ') {
            return false;
        }
        self.text.push(' ');
        true
    }

    /// Remove the final character; no-op on an empty sentence
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Replace the trailing word, preserving everything before it
    ///
    /// With no word present (empty or all-whitespace sentence) the buffer
    /// becomes `word`.
    pub fn replace_trailing_word(&mut self, word: &str) {
        // Trailing spaces are dropped with the replaced word; rsplit_once
        // removes exactly the separator before it
        let replaced = match self.text.trim_end().rsplit_once(char::is_whitespace) {
            Some((head, _last)) => format!("{head} {word}"),
            None => word.to_string(),
        };
        self.text = replaced;
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The sentence text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The trailing word (last whitespace-delimited token)
    ///
    /// Trailing spaces are ignored, so completions for the last word stay
    /// available right after a word boundary. Empty only when the sentence
    /// holds no word at all.
    #[must_use]
    pub fn trailing_word(&self) -> &str {
        self.text.split_whitespace().next_back().unwrap_or("")
    }

    /// Whether the sentence is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_delete() {
        let mut buf = SentenceBuffer::new();
        buf.append_char('H');
        buf.append_char('I');
        assert_eq!(buf.as_str(), "HI");

        buf.delete_last();
        assert_eq!(buf.as_str(), "H");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buf = SentenceBuffer::new();
        buf.delete_last();
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn space_is_idempotent() {
        let mut buf = SentenceBuffer::new();
        assert!(!buf.append_space_if_needed());

        buf.append_char('A');
        assert!(buf.append_space_if_needed());
        assert!(!buf.append_space_if_needed());
        assert_eq!(buf.as_str(), "A ");
    }

    #[test]
    fn replace_trailing_word_keeps_preceding_words() {
        let mut buf = SentenceBuffer::new();
        for c in "I AM HE".chars() {
            buf.append_char(c);
        }
        buf.replace_trailing_word("HELLO");
        assert_eq!(buf.as_str(), "I AM HELLO");
    }

    #[test]
    fn replace_trailing_word_on_empty_sets_word() {
        let mut buf = SentenceBuffer::new();
        buf.replace_trailing_word("HELLO");
        assert_eq!(buf.as_str(), "HELLO");
    }

    #[test]
    fn trailing_word_derivation() {
        let mut buf = SentenceBuffer::new();
        assert_eq!(buf.trailing_word(), "");

        for c in "I AM HE".chars() {
            buf.append_char(c);
        }
        assert_eq!(buf.trailing_word(), "HE");

        // Trailing spaces do not hide the last word
        buf.append_space_if_needed();
        assert_eq!(buf.trailing_word(), "HE");
    }
}
