//! Grid: the 5x5 keyword square shared by both ciphers.
//!
//! A keyword is sanitized into a permutation of the 25-letter alphabet
//! (`J` folded into `I`), then laid out row-major into a 5x5 matrix.
//! The grid keeps both directions of the mapping, letter to position and
//! position to letter, so either cipher can look up a cell in constant time.
//!
//! Coordinates are 1-indexed throughout: rows and columns run from 1 to 5.

use std::fmt;

/// The 25 letters a grid may hold, in natural order. `J` is absent.
pub const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side length of the square.
pub const GRID_SIZE: usize = 5;

/// Number of cells in the square.
const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Number of slots in the ASCII uppercase lookup table.
const NUM_ASCII_LETTERS: usize = 26;

/// A 1-indexed cell coordinate inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row, 1..=5.
    pub row: u8,
    /// Column, 1..=5.
    pub column: u8,
}

impl Position {
    /// Returns this position moved by `delta` along the row axis, wrapped into 1..=5.
    pub(crate) fn step_row(self, delta: i8) -> Self {
        Position {
            row: wrap(self.row as i8 + delta) as u8,
            column: self.column,
        }
    }

    /// Returns this position moved by `delta` along the column axis, wrapped into 1..=5.
    pub(crate) fn step_column(self, delta: i8) -> Self {
        Position {
            row: self.row,
            column: wrap(self.column as i8 + delta) as u8,
        }
    }
}

/// Brings a row or column index that fell off one edge of the grid back in
/// from the opposite edge.
///
/// Values above 5 lose 5, values below 1 gain 5, anything else is unchanged.
///
/// # Examples
///
/// ```
/// use polybius_playfair::grid::wrap;
///
/// assert_eq!(wrap(6), 1);
/// assert_eq!(wrap(0), 5);
/// assert_eq!(wrap(3), 3);
/// ```
pub const fn wrap(index: i8) -> i8 {
    let size = GRID_SIZE as i8;
    if index > size {
        index - size
    } else if index < 1 {
        index + size
    } else {
        index
    }
}

/// Maps `J` to `I`; every other character passes through.
pub(crate) fn fold_j(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}

/// Returns `true` if `c` is one of the 25 grid letters.
pub(crate) fn is_grid_letter(c: char) -> bool {
    c != 'J' && c.is_ascii_uppercase()
}

/// Turns an arbitrary keyword into the 25-letter ordering used to fill a grid.
///
/// The keyword is uppercased, `J` becomes `I`, characters outside the
/// alphabet are dropped and repeats keep only their first occurrence. The
/// rest of the alphabet follows in natural order.
///
/// # Examples
///
/// ```
/// use polybius_playfair::grid::sanitize_keyword;
///
/// let sanitized = sanitize_keyword("Playfair Example");
/// assert_eq!(sanitized, "PLAYFIREXMBCDGHKNOQSTUVWZ");
/// assert_eq!(sanitize_keyword(""), "ABCDEFGHIKLMNOPQRSTUVWXYZ");
/// ```
pub fn sanitize_keyword(keyword: &str) -> String {
    let mut seen = [false; NUM_ASCII_LETTERS];
    let mut sanitized = String::with_capacity(NUM_CELLS);

    let keyword = keyword.to_uppercase();
    for c in keyword.chars().map(fold_j).chain(ALPHABET.chars()) {
        if !is_grid_letter(c) {
            continue;
        }
        let slot = &mut seen[ascii_index(c)];
        if !*slot {
            *slot = true;
            sanitized.push(c);
        }
    }

    // The alphabet caps this at 25, keep the guard anyway.
    sanitized.chars().take(NUM_CELLS).collect()
}

/// Index of an ASCII uppercase letter in a 26-slot table.
fn ascii_index(c: char) -> usize {
    (c as u8 - b'A') as usize
}

/// A 5x5 Polybius square.
///
/// Built once from a keyword and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Position>; NUM_ASCII_LETTERS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_keyword(ALPHABET)
    }
}

impl Grid {
    /// Builds the grid for `keyword`. Never fails: an empty or letterless
    /// keyword yields the plain alphabetic square.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::grid::Grid;
    ///
    /// let grid = Grid::from_keyword("KEYWORD");
    /// assert_eq!(grid.letter_at(1, 1), Some('K'));
    /// assert_eq!(grid.position_of('E').map(|p| (p.row, p.column)), Some((1, 2)));
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        let sanitized = sanitize_keyword(keyword);
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; NUM_ASCII_LETTERS];

        for (i, letter) in sanitized.chars().enumerate() {
            let (row, column) = (i / GRID_SIZE, i % GRID_SIZE);
            cells[row][column] = letter;
            positions[ascii_index(letter)] = Some(Position {
                row: row as u8 + 1,
                column: column as u8 + 1,
            });
        }

        Grid { cells, positions }
    }

    /// Returns the letter at a 1-indexed `(row, column)`, or `None` outside 1..=5.
    pub fn letter_at(&self, row: u8, column: u8) -> Option<char> {
        let size = GRID_SIZE as u8;
        if !(1..=size).contains(&row) || !(1..=size).contains(&column) {
            return None;
        }
        Some(self.cells[(row - 1) as usize][(column - 1) as usize])
    }

    /// Returns the 1-indexed position of `letter`.
    ///
    /// Lookup is exact: lowercase letters, `J` and non-letters have no position.
    pub fn position_of(&self, letter: char) -> Option<Position> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.positions[ascii_index(letter)]
    }

    /// Letter stored at a position produced by this grid.
    pub(crate) fn letter(&self, position: Position) -> char {
        self.cells[(position.row - 1) as usize][(position.column - 1) as usize]
    }

    /// The five rows, top to bottom.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// The grid letters in row-major order, i.e. the sanitized keyword.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 1..=GRID_SIZE {
            write!(f, "  {}", column)?;
        }
        writeln!(f)?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}", i + 1)?;
            for letter in row {
                write!(f, "  {}", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(6), 1);
        assert_eq!(wrap(0), 5);
        assert_eq!(wrap(3), 3);
        assert_eq!(wrap(1), 1);
        assert_eq!(wrap(5), 5);
    }

    #[test]
    fn test_sanitize_default_alphabet() {
        assert_eq!(sanitize_keyword(ALPHABET), ALPHABET);
        assert_eq!(sanitize_keyword(""), ALPHABET);
    }

    #[test]
    fn test_sanitize_folds_j_into_i() {
        let sanitized = sanitize_keyword("jam");
        assert!(sanitized.starts_with("IAM"));
        assert!(!sanitized.contains('J'));
        assert_eq!(sanitized.matches('I').count(), 1);
    }

    #[test]
    fn test_sanitize_drops_non_alphabet_and_duplicates() {
        let sanitized = sanitize_keyword("b-a 1b!C c");
        assert!(sanitized.starts_with("BAC"));
        assert_eq!(sanitized.len(), 25);
    }

    #[test]
    fn test_sanitize_is_permutation_of_alphabet() {
        let sanitized = sanitize_keyword("The quick brown fox jumps over the lazy dog");
        let mut letters: Vec<char> = sanitized.chars().collect();
        letters.sort_unstable();
        assert_eq!(letters.into_iter().collect::<String>(), ALPHABET);
    }

    #[test]
    fn test_grid_positions_are_consistent() {
        let grid = Grid::from_keyword("MONARCHY");
        for letter in ALPHABET.chars() {
            let pos = grid.position_of(letter).unwrap();
            assert_eq!(grid.letter_at(pos.row, pos.column), Some(letter));
            assert_eq!(grid.letter(pos), letter);
        }
    }

    #[test]
    fn test_grid_position_lookup_misses() {
        let grid = Grid::default();
        assert_eq!(grid.position_of('J'), None);
        assert_eq!(grid.position_of('a'), None);
        assert_eq!(grid.position_of(' '), None);
        assert_eq!(grid.position_of('É'), None);
    }

    #[test]
    fn test_letter_at_out_of_range() {
        let grid = Grid::default();
        assert_eq!(grid.letter_at(0, 1), None);
        assert_eq!(grid.letter_at(1, 6), None);
        assert_eq!(grid.letter_at(5, 5), Some('Z'));
    }

    #[test]
    fn test_letters_match_sanitized_keyword() {
        let grid = Grid::from_keyword("MONARCHY");
        assert_eq!(
            grid.letters().collect::<String>(),
            sanitize_keyword("MONARCHY")
        );
    }

    #[test]
    fn test_position_steps_wrap() {
        let corner = Position { row: 5, column: 5 };
        assert_eq!(corner.step_row(1), Position { row: 1, column: 5 });
        assert_eq!(corner.step_column(1), Position { row: 5, column: 1 });

        let origin = Position { row: 1, column: 1 };
        assert_eq!(origin.step_row(-1), Position { row: 5, column: 1 });
        assert_eq!(origin.step_column(-1), Position { row: 1, column: 5 });
    }

    #[test]
    fn test_display_default_grid() {
        let expected = "   1  2  3  4  5\n\
                        1  A  B  C  D  E\n\
                        2  F  G  H  I  K\n\
                        3  L  M  N  O  P\n\
                        4  Q  R  S  T  U\n\
                        5  V  W  X  Y  Z\n";
        assert_eq!(Grid::default().to_string(), expected);
    }
}
