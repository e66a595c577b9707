//! Property tests for grid sanitization and cipher round trips.

use polybius_playfair::grid::{sanitize_keyword, Grid, ALPHABET};
use polybius_playfair::playfair::BOGUS_LETTER;
use polybius_playfair::{Playfair, Polybius};
use proptest::prelude::*;

/// Plaintext of grid letters other than the bogus letter, even length,
/// with no two neighbours equal.
fn clean_plaintext() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(clean_letters()), 0..40).prop_map(|letters| {
        let mut text = String::new();
        for letter in letters {
            if !text.ends_with(letter) {
                text.push(letter);
            }
        }
        if text.chars().count() % 2 != 0 {
            text.pop();
        }
        text
    })
}

fn clean_letters() -> Vec<char> {
    ALPHABET.chars().filter(|&c| c != BOGUS_LETTER).collect()
}

proptest! {
    #[test]
    fn sanitized_keyword_is_alphabet_permutation(keyword in ".*") {
        let sanitized = sanitize_keyword(&keyword);
        prop_assert_eq!(sanitized.chars().count(), 25);

        let mut letters: Vec<char> = sanitized.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        prop_assert_eq!(letters.into_iter().collect::<String>(), ALPHABET);
    }

    #[test]
    fn grid_from_any_keyword_is_consistent(keyword in ".*") {
        let grid = Grid::from_keyword(&keyword);
        for letter in ALPHABET.chars() {
            let pos = grid.position_of(letter).unwrap();
            prop_assert_eq!(grid.letter_at(pos.row, pos.column), Some(letter));
        }
    }

    #[test]
    fn polybius_letter_pairs_roundtrip(
        keyword in "[A-Za-z ]{0,20}",
        a in prop::sample::select(ALPHABET.chars().collect::<Vec<_>>()),
        b in prop::sample::select(ALPHABET.chars().collect::<Vec<_>>()),
    ) {
        prop_assume!(a != b);
        let cipher = Polybius::new(Some(keyword.as_str()));
        let plaintext: String = [a, b].iter().collect();
        let encrypted = cipher.encrypt(&plaintext, None);
        prop_assert_eq!(encrypted.len(), 4);
        prop_assert_eq!(cipher.decrypt(&encrypted, None).unwrap(), plaintext);
    }

    #[test]
    fn polybius_decrypt_never_panics(keyword in ".{0,10}", text in ".{0,30}") {
        let cipher = Polybius::new(Some(keyword.as_str()));
        let length = text.chars().count();
        let result = cipher.decrypt(&text, None);
        prop_assert_eq!(result.is_ok(), length % 2 == 0);
    }

    #[test]
    fn playfair_clean_plaintext_roundtrips(
        keyword in "[A-Za-z ]{0,20}",
        plaintext in clean_plaintext(),
    ) {
        let cipher = Playfair::new(Some(keyword.as_str()));
        let encrypted = cipher.encrypt(&plaintext);
        prop_assert_eq!(encrypted.len(), plaintext.len());
        prop_assert_eq!(cipher.decrypt(&encrypted).unwrap(), plaintext);
    }

    #[test]
    fn playfair_ciphertext_has_even_length(keyword in ".{0,10}", text in ".{0,40}") {
        let cipher = Playfair::new(Some(keyword.as_str()));
        let encrypted = cipher.encrypt(&text);
        prop_assert!(encrypted.len() % 2 == 0);
        prop_assert!(cipher.decrypt(&encrypted).is_ok());
    }
}
