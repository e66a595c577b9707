//! Playfair: digraph substitution on the Polybius grid.
//!
//! Plaintext is reduced to grid letters and split into digraphs, with the
//! bogus letter `X` breaking up doubled letters and filling a lone tail.
//! Each digraph is then substituted by the classical rule:
//!
//! ```text
//! same row     -> each letter moves one column right (left to decrypt)
//! same column  -> each letter moves one row down (up to decrypt)
//! rectangle    -> each letter takes the other letter's column
//! ```
//!
//! Decryption strips every `X` from the result, including any `X` that was
//! part of the plaintext.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::CipherConfig;
use crate::error::{CipherError, Result};
use crate::grid::{Grid, Position, ALPHABET};
use crate::utils::text::grid_letters;

/// Filler used to pad an odd tail and to split doubled letters.
pub const BOGUS_LETTER: char = 'X';

/// An ordered pair of letters substituted as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    /// Left letter of the pair.
    pub first: char,
    /// Right letter of the pair.
    pub second: char,
}

impl Digraph {
    /// Pairs two letters.
    pub fn new(first: char, second: char) -> Self {
        Digraph { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Which way a digraph is being substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Row/column step for the same-row and same-column rules.
    fn delta(self) -> i8 {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => -1,
        }
    }
}

/// Playfair cipher over a keyword grid.
///
/// Only the grid is kept; the Polybius markers play no part here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    grid: Grid,
}

impl Default for Playfair {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Playfair {
    /// Creates a cipher whose grid is seeded by `keyword`, exactly as
    /// [`Polybius::new`](crate::Polybius::new) would build it.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Playfair;
    ///
    /// let cipher = Playfair::new(Some("MONARCHY"));
    /// assert_eq!(cipher.encrypt("instruments"), "GATLMZCLRQXA");
    /// ```
    pub fn new(keyword: Option<&str>) -> Self {
        let grid = Grid::from_keyword(keyword.unwrap_or(ALPHABET));
        let sanitized: String = grid.letters().collect();
        debug!(sanitized_keyword = %sanitized, "playfair grid built");
        Playfair { grid }
    }

    /// Creates a cipher from the keyword in a [`CipherConfig`].
    pub fn with_config(config: &CipherConfig) -> Self {
        Self::new(config.keyword.as_deref())
    }

    /// The grid this cipher reads from.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Splits plaintext into the digraphs that encryption substitutes.
    ///
    /// The text is reduced to grid letters and, if that leaves an odd count,
    /// padded with one [`BOGUS_LETTER`]. Letters are then paired left to
    /// right. When a pair would repeat a letter, the first letter is paired
    /// with the bogus letter instead and the repeat starts the next pair.
    /// A letter left over at the end is paired with the bogus letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::playfair::{Digraph, Playfair};
    ///
    /// let digraphs: Vec<String> = Playfair::split_digraphs("balloon")
    ///     .iter()
    ///     .map(Digraph::to_string)
    ///     .collect();
    /// assert_eq!(digraphs, ["BA", "LX", "LO", "ON", "XX"]);
    /// ```
    pub fn split_digraphs(text: &str) -> Vec<Digraph> {
        let mut letters = grid_letters(text);
        if !letters.len().is_multiple_of(2) {
            letters.push(BOGUS_LETTER);
        }

        let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
        let mut carry: Option<char> = None;
        for &letter in &letters {
            match carry.take() {
                None => carry = Some(letter),
                Some(first) if first == letter => {
                    digraphs.push(Digraph::new(first, BOGUS_LETTER));
                    carry = Some(letter);
                }
                Some(first) => digraphs.push(Digraph::new(first, letter)),
            }
        }
        if let Some(last) = carry {
            digraphs.push(Digraph::new(last, BOGUS_LETTER));
        }
        digraphs
    }

    /// Encrypts `text`. Characters that are not grid letters are discarded,
    /// `J` is read as `I`, and case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Playfair;
    ///
    /// let cipher = Playfair::default();
    /// assert_eq!(cipher.encrypt("helloworld"), "KCNVMPYMQMCY");
    /// ```
    pub fn encrypt(&self, text: &str) -> String {
        let digraphs = Self::split_digraphs(text);
        let mut encrypted = String::with_capacity(digraphs.len() * 2);
        for digraph in digraphs {
            let substituted = self.substitute(digraph, Direction::Encrypt);
            encrypted.push(substituted.first);
            encrypted.push(substituted.second);
        }
        encrypted
    }

    /// Decrypts `encrypted_text` and strips every bogus letter from the result.
    ///
    /// The ciphertext gets the same normalization as plaintext before being
    /// cut into fixed pairs.
    ///
    /// # Errors
    /// Returns [`CipherError::GroupSize`] if the normalized ciphertext has an
    /// odd number of letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Playfair;
    ///
    /// let cipher = Playfair::default();
    /// assert_eq!(cipher.decrypt("KCNVMPYMQMCY").unwrap(), "HELLOWORLD");
    /// assert!(cipher.decrypt("KCN").is_err());
    /// ```
    pub fn decrypt(&self, encrypted_text: &str) -> Result<String> {
        let letters = grid_letters(encrypted_text);
        if !letters.len().is_multiple_of(2) {
            warn!(length = letters.len(), "playfair ciphertext has odd length");
            return Err(CipherError::GroupSize {
                length: letters.len(),
            });
        }

        let decrypted = letters
            .chunks_exact(2)
            .map(|pair| self.substitute(Digraph::new(pair[0], pair[1]), Direction::Decrypt))
            .flat_map(|digraph| [digraph.first, digraph.second])
            .filter(|&letter| letter != BOGUS_LETTER)
            .collect();
        Ok(decrypted)
    }

    /// Applies the same-row / same-column / rectangle rule to one digraph.
    fn substitute(&self, digraph: Digraph, direction: Direction) -> Digraph {
        let (Some(first), Some(second)) = (
            self.grid.position_of(digraph.first),
            self.grid.position_of(digraph.second),
        ) else {
            // Callers only pass grid letters.
            return digraph;
        };

        let delta = direction.delta();
        let (first, second) = if first.row == second.row {
            (first.step_column(delta), second.step_column(delta))
        } else if first.column == second.column {
            (first.step_row(delta), second.step_row(delta))
        } else {
            (
                Position {
                    row: first.row,
                    column: second.column,
                },
                Position {
                    row: second.row,
                    column: first.column,
                },
            )
        };

        let substituted = Digraph::new(self.grid.letter(first), self.grid.letter(second));
        trace!(?direction, from = %digraph, to = %substituted, "playfair digraph");
        substituted
    }
}

impl fmt::Display for Playfair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
