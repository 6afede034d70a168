use crate::alphabet::{letter_index, normalize, validate_key, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};
use std::fmt;
use tracing::trace;

/// Side length of the key square
pub const SIDE: usize = 5;

/// 5x5 grid of distinct letters, the whole alphabet bar one omitted letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    grid: [[char; SIDE]; SIDE],
    /// (row, col) of each letter by alphabet index, `None` for the omitted letter
    positions: [Option<(usize, usize)>; ALPHABET_LEN],
    omitted: char,
}

impl KeySquare {
    /// Build the key square for a key, leaving out `omitted`
    ///
    /// The key's letters go first in order of first occurrence, followed by the
    /// rest of the alphabet without the omitted letter.
    /// ```
    /// use rusty_classics::cipher::playfair::KeySquare;
    /// let square = KeySquare::new("playfair example", 'J').unwrap();
    /// assert_eq!(square.row(0), ['P', 'L', 'A', 'Y', 'F']);
    /// assert_eq!(square.row(4), ['T', 'U', 'V', 'W', 'Z']);
    /// ```
    pub fn new(key: &str, omitted: char) -> CipherResult<Self> {
        let key = normalize(key);
        validate_key(&key)?;
        let omitted = omitted.to_ascii_uppercase();

        let mut seen = [false; ALPHABET_LEN];
        let mut letters = Vec::with_capacity(ALPHABET_LEN);
        for c in key.chars() {
            let index = letter_index(c)?;
            if !seen[index] {
                seen[index] = true;
                letters.push(c);
            }
        }

        letters.extend(
            ALPHABET
                .iter()
                .enumerate()
                .filter(|&(i, &c)| !seen[i] && c != omitted)
                .map(|(_, &c)| c),
        );

        // a key containing the omitted letter, or an omitted letter outside
        // the alphabet, both leave 26 letters here
        if letters.len() != SIDE * SIDE {
            return Err(CipherError::KeySquare { len: letters.len() });
        }

        let mut grid = [[' '; SIDE]; SIDE];
        let mut positions = [None; ALPHABET_LEN];
        for (i, &c) in letters.iter().enumerate() {
            let (row, col) = (i / SIDE, i % SIDE);
            grid[row][col] = c;
            positions[letter_index(c)?] = Some((row, col));
        }

        trace!(%key, %omitted, "built key square");

        Ok(Self {
            grid,
            positions,
            omitted,
        })
    }

    /// The letter left out of the square
    pub fn omitted(&self) -> char {
        self.omitted
    }

    /// The (row, col) of a letter in the square
    pub fn position(&self, letter: char) -> CipherResult<(usize, usize)> {
        letter_index(letter)
            .ok()
            .and_then(|i| self.positions[i])
            .ok_or(CipherError::CharacterNotInGrid(letter))
    }

    /// The letter at (row, col), both wrap around the square
    pub fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIDE][col % SIDE]
    }

    pub fn row(&self, row: usize) -> [char; SIDE] {
        self.grid[row]
    }

    /// Every letter of the square in row-major order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flatten().copied()
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
