//! Polybius: the base square cipher.
//!
//! Every grid letter is replaced by its two-digit `row column` coordinate.
//! Characters with no cell are replaced by a marker on the way in, and digit
//! groups that name no cell are replaced by a marker on the way out.

use std::fmt;

use tracing::{debug, warn};

use crate::config::{CipherConfig, DEFAULT_UNIDENTIFIED_GROUP, DEFAULT_UNIDENTIFIED_SYMBOL};
use crate::error::{CipherError, Result};
use crate::grid::{Grid, Position, ALPHABET};

/// Outcome of reading one two-character ciphertext group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoded {
    Letter(char),
    Unidentified,
}

/// Polybius square cipher over a keyword grid.
///
/// Lookup on encryption is exact: only the 25 uppercase grid letters have a
/// coordinate. Lowercase letters, `J`, whitespace and punctuation are all
/// written as the unidentified-group marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polybius {
    grid: Grid,
    unidentified_group: String,
    unidentified_symbol: String,
}

impl Default for Polybius {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Polybius {
    /// Creates a cipher whose grid is seeded by `keyword`.
    ///
    /// `None` uses the plain alphabet. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Polybius;
    ///
    /// let cipher = Polybius::new(Some("zebra"));
    /// assert_eq!(cipher.sanitized_keyword(), "ZEBRACDFGHIKLMNOPQSTUVWXY");
    /// ```
    pub fn new(keyword: Option<&str>) -> Self {
        Self::build(
            keyword,
            DEFAULT_UNIDENTIFIED_GROUP,
            DEFAULT_UNIDENTIFIED_SYMBOL,
        )
    }

    /// Creates a cipher from a [`CipherConfig`], taking its keyword and its
    /// markers as the instance defaults.
    pub fn with_config(config: &CipherConfig) -> Self {
        Self::build(
            config.keyword.as_deref(),
            &config.unidentified_group,
            &config.unidentified_symbol,
        )
    }

    fn build(keyword: Option<&str>, unidentified_group: &str, unidentified_symbol: &str) -> Self {
        let grid = Grid::from_keyword(keyword.unwrap_or(ALPHABET));
        let sanitized: String = grid.letters().collect();
        debug!(sanitized_keyword = %sanitized, "polybius grid built");
        Polybius {
            grid,
            unidentified_group: unidentified_group.to_string(),
            unidentified_symbol: unidentified_symbol.to_string(),
        }
    }

    /// The grid this cipher reads from.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The 25-letter row-major ordering of the grid.
    pub fn sanitized_keyword(&self) -> String {
        self.grid.letters().collect()
    }

    /// Returns the 1-indexed `(row, column)` of a single letter, or `None` if
    /// it has no cell.
    pub fn encrypt_letter(&self, letter: char) -> Option<(u8, u8)> {
        self.grid
            .position_of(letter)
            .map(|pos| (pos.row, pos.column))
    }

    /// Encrypts `text` into concatenated two-digit coordinates.
    ///
    /// Each character is looked up as-is. A character without a cell is
    /// written as `unidentified_group`, or the instance default (`"-1"`
    /// unless configured otherwise) when that is `None` or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Polybius;
    ///
    /// let cipher = Polybius::default();
    /// assert_eq!(cipher.encrypt("HELLO WORLD", None), "2315313134-15234423114");
    /// assert_eq!(cipher.encrypt("HI!", Some("??")), "2324??");
    /// ```
    pub fn encrypt(&self, text: &str, unidentified_group: Option<&str>) -> String {
        let marker = marker_or(unidentified_group, &self.unidentified_group);
        let mut encrypted = String::with_capacity(text.len() * 2);

        for c in text.chars() {
            match self.grid.position_of(c) {
                Some(pos) => {
                    encrypted.push(digit(pos.row));
                    encrypted.push(digit(pos.column));
                }
                None => encrypted.push_str(marker),
            }
        }
        encrypted
    }

    /// Decrypts coordinate pairs back into letters.
    ///
    /// The input is cut into consecutive two-character groups. A group that
    /// is the `"-1"` marker, or holds anything besides the digits 1 to 5,
    /// becomes `unidentified_symbol` (instance default `"_"` when `None` or
    /// empty).
    ///
    /// # Errors
    /// Returns [`CipherError::GroupSize`] if the input has an odd number of
    /// characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::Polybius;
    ///
    /// let cipher = Polybius::default();
    /// assert_eq!(cipher.decrypt("2315313134-15234423114", None).unwrap(), "HELLO_WORLD");
    /// assert!(cipher.decrypt("123", None).is_err());
    /// ```
    pub fn decrypt(&self, encrypted_text: &str, unidentified_symbol: Option<&str>) -> Result<String> {
        let marker = marker_or(unidentified_symbol, &self.unidentified_symbol);
        let symbols: Vec<char> = encrypted_text.chars().collect();
        if !symbols.len().is_multiple_of(2) {
            warn!(length = symbols.len(), "polybius ciphertext has odd length");
            return Err(CipherError::GroupSize {
                length: symbols.len(),
            });
        }

        let mut text = String::with_capacity(symbols.len() / 2);
        for group in symbols.chunks_exact(2) {
            match self.decode_group(group[0], group[1]) {
                Decoded::Letter(letter) => text.push(letter),
                Decoded::Unidentified => text.push_str(marker),
            }
        }
        Ok(text)
    }

    /// Reads one `row column` group.
    fn decode_group(&self, row: char, column: char) -> Decoded {
        let mut marker = DEFAULT_UNIDENTIFIED_GROUP.chars();
        if marker.next() == Some(row) && marker.next() == Some(column) {
            return Decoded::Unidentified;
        }
        match (coordinate(row), coordinate(column)) {
            (Some(row), Some(column)) => Decoded::Letter(self.grid.letter(Position { row, column })),
            _ => Decoded::Unidentified,
        }
    }
}

impl fmt::Display for Polybius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Picks the caller's marker unless it is missing or empty.
fn marker_or<'a>(marker: Option<&'a str>, default: &'a str) -> &'a str {
    match marker {
        Some(marker) if !marker.is_empty() => marker,
        _ => default,
    }
}

/// Renders a 1..=5 coordinate as its ASCII digit.
fn digit(index: u8) -> char {
    char::from(b'0' + index)
}

/// Parses an ASCII digit in `1..=5`.
fn coordinate(c: char) -> Option<u8> {
    match c {
        '1'..='5' => Some(c as u8 - b'0'),
        _ => None,
    }
}
