use crate::alphabet::{letter_index, normalize};
use crate::cipher::vigenere::Vigenere;
use crate::cipher::Cipher;
use crate::dictionary::Dictionary;
use crate::error::CipherResult;
use std::fmt;
use std::iter::Take;
use std::slice;
use tracing::{debug, info};

/// How many candidate keys to try by default
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttackOptions {
    /// Only the first `max_candidates` keys of the candidate list are tried
    pub max_candidates: usize,
}

impl Default for AttackOptions {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// A key whose decryption looked like english, along with that decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: String,
    pub plaintext: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {} Output: {}", self.key, self.plaintext)
    }
}

/// Brute force a ciphertext by trying every key in a candidate list
///
/// Each candidate key decrypts the ciphertext and the result is kept if the
/// dictionary thinks it looks like english. The attack is lazy: nothing is
/// decrypted until it is iterated, and every call to [`DictionaryAttack::iter`]
/// starts again from the first key.
#[derive(Debug, Clone)]
pub struct DictionaryAttack<'a, C, S> {
    cipher: C,
    ciphertext: String,
    keys: &'a [S],
    dictionary: &'a Dictionary,
    options: AttackOptions,
}

impl<'a, C, S> DictionaryAttack<'a, C, S>
where
    C: Cipher,
    S: AsRef<str>,
{
    /// Set up an attack, fails if the ciphertext contains anything other than letters and spaces
    pub fn new(
        cipher: C,
        ciphertext: &str,
        keys: &'a [S],
        dictionary: &'a Dictionary,
    ) -> CipherResult<Self> {
        let ciphertext = normalize(ciphertext);
        for c in ciphertext.chars() {
            letter_index(c)?;
        }

        Ok(Self {
            cipher,
            ciphertext,
            keys,
            dictionary,
            options: AttackOptions::default(),
        })
    }

    pub fn with_options(mut self, options: AttackOptions) -> Self {
        self.options = options;
        self
    }

    /// The normalized ciphertext under attack
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Number of candidate keys that will be tried
    pub fn total(&self) -> usize {
        self.keys.len().min(self.options.max_candidates)
    }

    /// Iterate over every candidate that passes, in key order
    pub fn iter(&self) -> Attempts<'_, C, S> {
        Attempts {
            attack: self,
            keys: self.keys.iter().take(self.options.max_candidates),
            tried: 0,
        }
    }

    fn try_key(&self, key: &str) -> Option<Candidate> {
        match self.cipher.decrypt(&self.ciphertext, key) {
            Ok(plaintext) if self.dictionary.looks_like_english(&plaintext) => {
                info!(key, %plaintext, "candidate key found");
                Some(Candidate {
                    key: key.to_string(),
                    plaintext,
                })
            }
            Ok(_) => None,
            Err(e) => {
                debug!(key, error = %e, "skipping candidate key");
                None
            }
        }
    }
}

impl<'a, 'b, C, S> IntoIterator for &'b DictionaryAttack<'a, C, S>
where
    C: Cipher,
    S: AsRef<str>,
{
    type Item = Candidate;
    type IntoIter = Attempts<'b, C, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the passing candidates of a [`DictionaryAttack`]
#[derive(Debug)]
pub struct Attempts<'b, C, S> {
    attack: &'b DictionaryAttack<'b, C, S>,
    keys: Take<slice::Iter<'b, S>>,
    tried: usize,
}

impl<C, S> Attempts<'_, C, S> {
    /// How many candidate keys have been tried so far
    pub fn tried(&self) -> usize {
        self.tried
    }
}

impl<C, S> Iterator for Attempts<'_, C, S>
where
    C: Cipher,
    S: AsRef<str>,
{
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        for key in self.keys.by_ref() {
            self.tried += 1;
            if let Some(candidate) = self.attack.try_key(key.as_ref()) {
                return Some(candidate);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.keys.size_hint().1)
    }
}

/// Guess the vigenere key of a ciphertext from a list of candidate keys
/// ```
/// use rusty_classics::attack::recover_key;
/// use rusty_classics::cipher::vigenere::vigenere_encrypt;
/// use rusty_classics::dictionary::Dictionary;
///
/// let dict = Dictionary::new(["THE", "AND", "KEY"]);
/// let ciphertext = vigenere_encrypt("THEQUICKFOX", "KEY").unwrap();
/// let attack = recover_key(&ciphertext, dict.words(), &dict).unwrap();
/// assert!(attack
///     .iter()
///     .any(|c| c.key == "KEY" && c.plaintext == "THEQUICKFOX"));
/// ```
pub fn recover_key<'a, S: AsRef<str>>(
    ciphertext: &str,
    candidate_keys: &'a [S],
    dictionary: &'a Dictionary,
) -> CipherResult<DictionaryAttack<'a, Vigenere, S>> {
    DictionaryAttack::new(Vigenere, ciphertext, candidate_keys, dictionary)
}
