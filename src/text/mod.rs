/// Splits text into lowercase word tokens: maximal runs of ASCII letters and
/// apostrophes. Everything else separates tokens and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_lowered(&text.to_lowercase())
}

/// [`tokenize`] for text that is already lowercased.
pub fn tokenize_lowered(lowered: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in lowered.chars() {
        if is_word_char(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '\''
}

/// The two derived views every scorer works from.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    pub lowered: String,
    pub tokens: Vec<String>,
}

impl TranscriptView {
    /// `text` is expected to be trimmed already.
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let tokens = tokenize_lowered(&lowered);
        Self { lowered, tokens }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Character (not byte) offset of the first occurrence of `needle`.
pub fn char_position(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

#[cfg(test)]
#[path = "../../tests/src_inline/text/tests.rs"]
mod tests;
