use super::Cipher;
use crate::alphabet::{index_letter, letter_index, normalize, validate_key, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};

/// Shift every letter of the text back by `shift` places, spaces are kept where they are
///
/// The text is uppercased first, the shift is taken modulo 26.
/// ```
/// use rusty_classics::cipher::caesar::caesar_shift;
/// assert_eq!(caesar_shift("Def Abc", 3).unwrap(), "ABC XYZ");
/// ```
pub fn caesar_shift(text: &str, shift: u8) -> CipherResult<String> {
    let shift = shift as usize % ALPHABET_LEN;

    text.chars()
        .map(|c| match c.to_ascii_uppercase() {
            ' ' => Ok(' '),
            upper => {
                let index = letter_index(upper)?;
                Ok(index_letter(index + ALPHABET_LEN - shift))
            }
        })
        .collect()
}

/// Try every one of the 26 shifts, returns `(shift, text)` pairs in shift order
pub fn caesar_brute_force(text: &str) -> CipherResult<Vec<(u8, String)>> {
    (0..ALPHABET_LEN as u8)
        .map(|shift| caesar_shift(text, shift).map(|shifted| (shift, shifted)))
        .collect()
}

/// Caesar cipher keyed by a single letter, `A` being the identity
///
/// Encrypting moves each letter forward by the index of the key letter.
#[derive(Debug, Default, Copy, Clone)]
pub struct Caesar;

impl Caesar {
    fn shift_for(key: &str) -> CipherResult<u8> {
        let key = normalize(key);
        validate_key(&key)?;
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(letter_index(c)? as u8),
            _ => Err(CipherError::InvalidKey(key)),
        }
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult<String> {
        let shift = Self::shift_for(key)?;
        caesar_shift(plaintext, ALPHABET_LEN as u8 - shift)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult<String> {
        caesar_shift(ciphertext, Self::shift_for(key)?)
    }
}
