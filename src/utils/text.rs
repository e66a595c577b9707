//! Plaintext normalization shared by the Playfair encrypt and decrypt paths.

use crate::grid::{fold_j, is_grid_letter};

/// Reduces `text` to the grid letters it contains.
///
/// Uppercases, maps `J` to `I` and drops every character that is not one of
/// the 25 grid letters.
pub(crate) fn grid_letters(text: &str) -> Vec<char> {
    text.to_uppercase()
        .chars()
        .map(fold_j)
        .filter(|&c| is_grid_letter(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_letters_uppercases_and_filters() {
        let letters: String = grid_letters("Hello, World!").into_iter().collect();
        assert_eq!(letters, "HELLOWORLD");
    }

    #[test]
    fn test_grid_letters_folds_j() {
        let letters: String = grid_letters("jujitsu").into_iter().collect();
        assert_eq!(letters, "IUIITSU");
    }

    #[test]
    fn test_grid_letters_empty() {
        assert!(grid_letters("").is_empty());
        assert!(grid_letters("123 !?").is_empty());
    }
}
