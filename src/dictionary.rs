use crate::alphabet::normalize;
use std::io::{self, BufRead};

/// Shortest dictionary entry that is allowed to match
const MIN_WORD_LEN: usize = 2;

/// Leading articles/pronouns stripped (once) before checking a candidate
const LEADING_WORDS: [&str; 3] = ["AN", "A", "I"];

/// An ordered word list of uppercase, space free words
///
/// The order is kept as the list doubles up as a source of candidate keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary, every word is uppercased and stripped of spaces, empty words are dropped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    /// Read one word per line, blank lines are skipped
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::new(lines))
    }

    /// The words in their original order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the word starts with a dictionary entry of at least two letters
    ///
    /// This is deliberately liberal: any text that merely begins with a known word
    /// is accepted, so `CATALOG` and `CATXQZ` are both known given `CAT`.
    /// ```
    /// use rusty_classics::dictionary::Dictionary;
    /// let dict = Dictionary::new(["CAT"]);
    /// assert!(dict.is_known_word("CATALOG"));
    /// assert!(!dict.is_known_word("CA"));
    /// ```
    pub fn is_known_word(&self, word: &str) -> bool {
        self.words
            .iter()
            .any(|entry| entry.chars().count() >= MIN_WORD_LEN && word.starts_with(entry.as_str()))
    }

    /// Cheap guess at whether a decryption is english
    ///
    /// A leading `AN`, `A` or `I` is stripped before the lookup, the first of those
    /// whose remainder is a known word wins. Without a match the whole candidate is
    /// looked up as is.
    pub fn looks_like_english(&self, candidate: &str) -> bool {
        LEADING_WORDS.iter().any(|prefix| {
            candidate
                .strip_prefix(prefix)
                .is_some_and(|rest| self.is_known_word(rest))
        }) || self.is_known_word(candidate)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::new(["THE", "CAT", "APPLE", "NEW", "O", "AM"])
    }

    #[test]
    fn test_new_normalizes() {
        let dict = Dictionary::new([" the ", "", "Ice Cream", "   "]);
        assert_eq!(dict.words(), ["THE", "ICECREAM"]);
    }

    #[test]
    fn test_from_reader() {
        let input = "apple\nbanana\n\ncherry\n";
        let dict = Dictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dict.words(), ["APPLE", "BANANA", "CHERRY"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let dict: Dictionary = ["ZEBRA", "APPLE", "MANGO"].into_iter().collect();
        assert_eq!(dict.words(), ["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn test_is_known_word_exact() {
        assert!(dict().is_known_word("THE"));
    }

    #[test]
    fn test_is_known_word_prefix_match() {
        // a prefix of the text matching counts, CATALOG passes because of CAT
        assert!(dict().is_known_word("CATALOG"));
        assert!(dict().is_known_word("THEXQJZ"));
    }

    #[test]
    fn test_is_known_word_too_short() {
        assert!(!dict().is_known_word("CA"));
        assert!(!dict().is_known_word(""));
    }

    #[test]
    fn test_is_known_word_ignores_one_letter_entries() {
        assert!(!dict().is_known_word("OXYGEN"));
    }

    #[test]
    fn test_is_known_word_counts_letters_not_bytes() {
        let dict = Dictionary::new(["É"]);
        assert!(!dict.is_known_word("ÉX"));
    }

    #[test]
    fn test_is_known_word_not_found() {
        assert!(!dict().is_known_word("XYZZY"));
        assert!(!Dictionary::default().is_known_word("THE"));
    }

    #[test]
    fn test_looks_like_english_plain() {
        assert!(dict().looks_like_english("THECATSAT"));
        assert!(!dict().looks_like_english("QQQQ"));
    }

    #[test]
    fn test_looks_like_english_strips_an() {
        assert!(dict().looks_like_english("ANAPPLE"));
    }

    #[test]
    fn test_looks_like_english_strips_a() {
        assert!(dict().looks_like_english("ACATNAP"));
    }

    #[test]
    fn test_looks_like_english_strips_i() {
        assert!(dict().looks_like_english("IAMHERE"));
    }

    #[test]
    fn test_looks_like_english_an_falls_back_to_a() {
        // AN + EWT is nothing, but A + NEWT starts with NEW
        assert!(dict().looks_like_english("ANEWT"));
    }

    #[test]
    fn test_looks_like_english_strips_once() {
        // after stripping a single leading A we still have a leading A
        assert!(!dict().looks_like_english("AAXCAT"));
    }

    #[test]
    fn test_looks_like_english_short_inputs() {
        for candidate in ["", "A", "I", "AN"] {
            assert!(!dict().looks_like_english(candidate));
        }
    }
}
