mod square;

pub use square::{KeySquare, SIDE};

use super::Cipher;
use crate::alphabet::{letter_index, normalize, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};

/// What to do with input letters equal to the omitted letter
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OmittedLetterPolicy {
    /// Fail with [`CipherError::CharacterNotInGrid`]
    #[default]
    Reject,
    /// Swap it for another letter first, in both the text and the key,
    /// e.g. J => I for the classic I/J merge
    Replace(char),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// How far to move along a row or column, modulo the side length
    fn step(self) -> usize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIDE - 1,
        }
    }
}

/// Playfair cipher settings, the same value must be used to encrypt and decrypt
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Playfair {
    omitted: char,
    filler: char,
    policy: OmittedLetterPolicy,
}

impl Default for Playfair {
    fn default() -> Self {
        Self {
            omitted: 'Q',
            filler: 'Z',
            policy: OmittedLetterPolicy::Reject,
        }
    }
}

impl Playfair {
    /// Playfair leaving out `omitted` and padding odd length input with `filler`
    pub fn new(omitted: char, filler: char) -> CipherResult<Self> {
        let playfair = Self {
            omitted: omitted.to_ascii_uppercase(),
            filler: filler.to_ascii_uppercase(),
            policy: OmittedLetterPolicy::Reject,
        };
        playfair.validate()?;
        Ok(playfair)
    }

    /// Playfair leaving out `omitted`, padding with `Z` (or `X` when `Z` is the omitted letter)
    pub fn with_omitted(omitted: char) -> CipherResult<Self> {
        let filler = if omitted.eq_ignore_ascii_case(&'Z') { 'X' } else { 'Z' };
        Self::new(omitted, filler)
    }

    pub fn omitting(mut self, omitted: char) -> CipherResult<Self> {
        self.omitted = omitted.to_ascii_uppercase();
        self.validate()?;
        Ok(self)
    }

    pub fn padding_with(mut self, filler: char) -> CipherResult<Self> {
        self.filler = filler.to_ascii_uppercase();
        self.validate()?;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: OmittedLetterPolicy) -> CipherResult<Self> {
        self.policy = match policy {
            OmittedLetterPolicy::Replace(c) => OmittedLetterPolicy::Replace(c.to_ascii_uppercase()),
            reject => reject,
        };
        self.validate()?;
        Ok(self)
    }

    pub fn omitted(&self) -> char {
        self.omitted
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn policy(&self) -> OmittedLetterPolicy {
        self.policy
    }

    fn validate(&self) -> CipherResult<()> {
        // an omitted letter outside A-Z leaves all 26 letters in the square
        letter_index(self.omitted).map_err(|_| CipherError::KeySquare { len: ALPHABET_LEN })?;
        letter_index(self.filler)?;
        if self.filler == self.omitted {
            return Err(CipherError::CharacterNotInGrid(self.filler));
        }
        if let OmittedLetterPolicy::Replace(c) = self.policy {
            letter_index(c)?;
            if c == self.omitted {
                return Err(CipherError::CharacterNotInGrid(c));
            }
        }

        Ok(())
    }

    /// Uppercase, strip spaces and apply the omitted letter policy
    fn substitute(&self, text: &str) -> String {
        normalize(text)
            .chars()
            .map(|c| match self.policy {
                OmittedLetterPolicy::Replace(r) if c == self.omitted => r,
                _ => c,
            })
            .collect()
    }

    /// The key square for `key`, with the omitted letter policy applied to the key
    pub fn key_square(&self, key: &str) -> CipherResult<KeySquare> {
        KeySquare::new(&self.substitute(key), self.omitted)
    }

    /// Uppercase, strip spaces, apply the omitted letter policy and pad to an even length
    pub fn prepare(&self, text: &str) -> String {
        let mut prepared = self.substitute(text);

        if prepared.len() % 2 != 0 {
            prepared.push(self.filler);
        }

        prepared
    }

    /// Encrypt with the key square for `key`
    /// ```
    /// use rusty_classics::cipher::playfair::Playfair;
    /// let playfair = Playfair::new('J', 'X').unwrap();
    /// assert_eq!(playfair.encrypt_with("hide the gold", "playfair example").unwrap(), "BMODZBXDNAGE");
    /// ```
    pub fn encrypt_with(&self, plaintext: &str, key: &str) -> CipherResult<String> {
        let square = self.key_square(key)?;
        self.run(&square, plaintext, Direction::Encrypt)
    }

    /// Decrypt with the key square for `key`
    pub fn decrypt_with(&self, ciphertext: &str, key: &str) -> CipherResult<String> {
        let square = self.key_square(key)?;
        self.run(&square, ciphertext, Direction::Decrypt)
    }

    /// Encrypt against an already built key square
    pub fn encrypt_square(&self, square: &KeySquare, plaintext: &str) -> CipherResult<String> {
        self.check_square(square)?;
        self.run(square, plaintext, Direction::Encrypt)
    }

    /// Decrypt against an already built key square
    pub fn decrypt_square(&self, square: &KeySquare, ciphertext: &str) -> CipherResult<String> {
        self.check_square(square)?;
        self.run(square, ciphertext, Direction::Decrypt)
    }

    fn check_square(&self, square: &KeySquare) -> CipherResult<()> {
        if square.omitted() != self.omitted {
            return Err(CipherError::OmittedLetterMismatch {
                expected: self.omitted,
                found: square.omitted(),
            });
        }

        Ok(())
    }

    fn run(&self, square: &KeySquare, text: &str, direction: Direction) -> CipherResult<String> {
        let prepared: Vec<char> = self.prepare(text).chars().collect();
        let step = direction.step();
        let mut out = String::with_capacity(prepared.len());

        for digraph in prepared.chunks_exact(2) {
            let (ra, ca) = square.position(digraph[0])?;
            let (rb, cb) = square.position(digraph[1])?;

            let (a, b) = if ca == cb {
                // same column, including the same cell twice
                ((ra + step, ca), (rb + step, cb))
            } else if ra == rb {
                ((ra, ca + step), (rb, cb + step))
            } else {
                ((ra, cb), (rb, ca))
            };

            out.push(square.at(a.0, a.1));
            out.push(square.at(b.0, b.1));
        }

        Ok(out)
    }
}

impl Cipher for Playfair {
    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult<String> {
        self.encrypt_with(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult<String> {
        self.decrypt_with(ciphertext, key)
    }
}

/// Build the key square for `key` leaving out `omitted`
pub fn build_key_square(key: &str, omitted: char) -> CipherResult<KeySquare> {
    KeySquare::new(key, omitted)
}

/// Playfair encrypt, odd length input is padded with `Z` (`X` if `Z` is omitted)
pub fn playfair_encrypt(plaintext: &str, key: &str, omitted: char) -> CipherResult<String> {
    Playfair::with_omitted(omitted)?.encrypt_with(plaintext, key)
}

/// Playfair decrypt, the inverse of [`playfair_encrypt`] for the same key and omitted letter
pub fn playfair_decrypt(ciphertext: &str, key: &str, omitted: char) -> CipherResult<String> {
    Playfair::with_omitted(omitted)?.decrypt_with(ciphertext, key)
}
