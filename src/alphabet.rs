use crate::error::{CipherError, CipherResult};

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// The uppercase latin alphabet, in order
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Uppercase every ASCII letter, everything else passes through unchanged
/// ```
/// use rusty_classics::alphabet::to_upper;
/// assert_eq!(to_upper("Hello, world"), "HELLO, WORLD");
/// ```
pub fn to_upper(text: &str) -> String {
    text.chars().map(|c| c.to_ascii_uppercase()).collect()
}

/// Remove every space from the text, keeping the order of everything else
/// ```
/// use rusty_classics::alphabet::remove_spaces;
/// assert_eq!(remove_spaces("  a b  c "), "abc");
/// ```
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// Uppercase and strip the spaces from a text, giving the letter stream the ciphers work over
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Map a letter A-Z onto its index 0-25
/// ```
/// use rusty_classics::alphabet::letter_index;
/// assert_eq!(letter_index('A').unwrap(), 0);
/// assert_eq!(letter_index('Z').unwrap(), 25);
/// assert!(letter_index('a').is_err());
/// ```
pub fn letter_index(letter: char) -> CipherResult<usize> {
    match letter {
        'A'..='Z' => Ok(letter as usize - 'A' as usize),
        _ => Err(CipherError::InvalidLetter(letter)),
    }
}

/// Map an index back onto its letter, wrapping around the alphabet
pub fn index_letter(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Check that a key is non-empty and only contains A-Z
pub(crate) fn validate_key(key: &str) -> CipherResult<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CipherError::InvalidKey(key.to_string()));
    }

    Ok(())
}
