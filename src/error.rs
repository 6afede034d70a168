use thiserror::Error;

/// Errors raised by the ciphers and the key square builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character outside A-Z was given where a letter was required
    #[error("invalid letter {0:?}, expected one of A-Z")]
    InvalidLetter(char),

    /// The key was empty or contained characters outside A-Z
    #[error("invalid key {0:?}: keys must be non-empty and only contain A-Z")]
    InvalidKey(String),

    /// The key square did not come out at exactly 25 letters
    #[error("key square must contain exactly 25 letters, got {len}")]
    KeySquare { len: usize },

    /// Playfair input contained a character which is not in the key square
    #[error("character {0:?} is not in the key square")]
    CharacterNotInGrid(char),

    /// A key square built without one letter was used by a playfair set up to omit another
    #[error("key square omits {found:?} but the cipher omits {expected:?}")]
    OmittedLetterMismatch { expected: char, found: char },
}

pub type CipherResult<T> = Result<T, CipherError>;
