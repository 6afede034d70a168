use crate::error::CipherResult;

pub mod caesar;
pub mod playfair;
pub mod vigenere;

/// A classical cipher driven by a textual key
///
/// This is the seam the dictionary attack works through: any cipher that can
/// decrypt with a candidate key can be brute forced with a word list.
pub trait Cipher {
    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult<String>;

    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult<String>;
}
