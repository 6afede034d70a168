use super::Cipher;
use crate::alphabet::{index_letter, letter_index, normalize, validate_key, ALPHABET_LEN};
use crate::error::CipherResult;

/// Encrypt with a repeating key
///
/// Both text and key are uppercased with spaces removed. Every letter is moved
/// forward by the index of its key letter plus one, so the key `A` is a shift of 1.
/// ```
/// use rusty_classics::cipher::vigenere::vigenere_encrypt;
/// assert_eq!(vigenere_encrypt("hello", "KEY").unwrap(), "SJKWT");
/// ```
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> CipherResult<String> {
    let key = key_indices(key)?;

    normalize(plaintext)
        .chars()
        .zip(key.iter().cycle())
        .map(|(c, k)| Ok(index_letter(letter_index(c)? + k + 1)))
        .collect()
}

/// Decrypt with a repeating key, the inverse of [`vigenere_encrypt`]
/// ```
/// use rusty_classics::cipher::vigenere::vigenere_decrypt;
/// assert_eq!(vigenere_decrypt("SJKWT", "KEY").unwrap(), "HELLO");
/// ```
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> CipherResult<String> {
    let key = key_indices(key)?;

    normalize(ciphertext)
        .chars()
        .zip(key.iter().cycle())
        // (c - k - 1) mod 26 without going negative
        .map(|(c, k)| Ok(index_letter(letter_index(c)? + 2 * ALPHABET_LEN - k - 1)))
        .collect()
}

fn key_indices(key: &str) -> CipherResult<Vec<usize>> {
    let key = normalize(key);
    validate_key(&key)?;
    key.chars().map(letter_index).collect()
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Vigenere;

impl Cipher for Vigenere {
    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult<String> {
        vigenere_encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult<String> {
        vigenere_decrypt(ciphertext, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_vigenere_encrypt_hello() {
        // H(7) + K(10) + 1 = 18 => S
        assert_eq!(vigenere_encrypt("HELLO", "KEY").unwrap(), "SJKWT");
    }

    #[test]
    fn test_vigenere_decrypt_hello() {
        assert_eq!(vigenere_decrypt("SJKWT", "KEY").unwrap(), "HELLO");
    }

    #[test]
    fn test_vigenere_key_a_is_shift_of_one() {
        assert_eq!(vigenere_encrypt("ABZ", "A").unwrap(), "BCA");
    }

    #[test]
    fn test_vigenere_decrypt_wraps() {
        assert_eq!(vigenere_decrypt("A", "Z").unwrap(), "A");
        assert_eq!(vigenere_decrypt("A", "A").unwrap(), "Z");
    }

    #[test]
    fn test_vigenere_normalizes_input() {
        assert_eq!(
            vigenere_encrypt("he llo", "k ey").unwrap(),
            vigenere_encrypt("HELLO", "KEY").unwrap()
        );
    }

    #[test]
    fn test_vigenere_round_trip() {
        const TEXT: &str = "Attack at dawn we ride at first light";
        for key in ["A", "Z", "LEMON", "KEY", "SUPERCALIFRAGILISTIC"] {
            let enc = vigenere_encrypt(TEXT, key).unwrap();
            assert_eq!(vigenere_decrypt(&enc, key).unwrap(), normalize(TEXT));
        }
    }

    #[test]
    fn test_vigenere_empty_text() {
        assert_eq!(vigenere_encrypt("", "KEY").unwrap(), "");
    }

    #[test]
    fn test_vigenere_empty_key_fails() {
        assert_eq!(
            vigenere_encrypt("HELLO", ""),
            Err(CipherError::InvalidKey(String::new()))
        );
        assert!(vigenere_decrypt("HELLO", "   ").is_err());
    }

    #[test]
    fn test_vigenere_bad_key_fails() {
        assert!(matches!(
            vigenere_decrypt("HELLO", "K3Y"),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_vigenere_bad_text_fails() {
        assert_eq!(
            vigenere_encrypt("HELLO!", "KEY"),
            Err(CipherError::InvalidLetter('!'))
        );
    }
}
