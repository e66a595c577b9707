//! Polybius square and Playfair classical ciphers.
//!
//! Both ciphers share a 5x5 grid built from a keyword: the keyword is
//! uppercased, `J` is folded into `I`, non-letters and repeats are dropped,
//! and the rest of the 25-letter alphabet fills the remaining cells.
//!
//! These are historical pen-and-paper ciphers. They offer no confidentiality
//! and exist for teaching and puzzles.
//!
//! # Architecture
//!
//! ```text
//! Grid      (keyword sanitization, letter <-> position tables, wrap rule)
//!     ↑ read-only after construction
//! Polybius  (letter -> two-digit row/column coordinate)
//! Playfair  (digraph splitting + same-row / same-column / rectangle rule)
//! ```
//!
//! # Examples
//!
//! Polybius coordinates, with `-1` for anything off the grid:
//!
//! ```
//! use polybius_playfair::Polybius;
//!
//! let cipher = Polybius::default();
//! let encrypted = cipher.encrypt("HELLO WORLD", None);
//! assert_eq!(encrypted, "2315313134-15234423114");
//! assert_eq!(cipher.decrypt(&encrypted, None).unwrap(), "HELLO_WORLD");
//! ```
//!
//! Playfair with a keyword:
//!
//! ```
//! use polybius_playfair::Playfair;
//!
//! let cipher = Playfair::new(Some("playfair example"));
//! let encrypted = cipher.encrypt("Hide the gold in the tree stump");
//! assert_eq!(encrypted, "BMODZBXDNABEKUDMUIXMMOUVIFMM");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "HIDETHEGOLDINTHETREESTUMP");
//! ```
//!
//! Printing a grid:
//!
//! ```
//! use polybius_playfair::Polybius;
//!
//! let cipher = Polybius::new(Some("KEYWORD"));
//! assert!(cipher.to_string().starts_with("   1  2  3  4  5\n1  K  E  Y  W  O\n"));
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod grid;
pub mod playfair;
pub mod polybius;

pub(crate) mod utils;

pub use config::CipherConfig;
pub use error::CipherError;
pub use grid::Grid;
pub use playfair::Playfair;
pub use polybius::Polybius;
