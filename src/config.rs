//! Cipher configuration.
//!
//! A [`CipherConfig`] carries the keyword and the two marker strings the
//! Polybius engine uses for symbols it cannot place. It can be built in code
//! or parsed from JSON; every field is optional in the document.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Marker emitted by Polybius encryption for a character with no grid cell.
pub const DEFAULT_UNIDENTIFIED_GROUP: &str = "-1";

/// Marker emitted by Polybius decryption for a group that names no grid cell.
pub const DEFAULT_UNIDENTIFIED_SYMBOL: &str = "_";

/// Settings shared by both cipher engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Keyword seeding the grid. `None` gives the plain alphabetic square.
    pub keyword: Option<String>,
    /// Written in place of a character that has no grid cell.
    pub unidentified_group: String,
    /// Written in place of a group that does not decode to a grid cell.
    pub unidentified_symbol: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            keyword: None,
            unidentified_group: DEFAULT_UNIDENTIFIED_GROUP.to_string(),
            unidentified_symbol: DEFAULT_UNIDENTIFIED_SYMBOL.to_string(),
        }
    }
}

impl CipherConfig {
    /// Default settings with the given keyword.
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        CipherConfig {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`CipherError::Config`](crate::error::CipherError::Config) if
    /// the document is not valid JSON or a field has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use polybius_playfair::CipherConfig;
    ///
    /// let config = CipherConfig::from_json(r#"{ "keyword": "MONARCHY" }"#).unwrap();
    /// assert_eq!(config.keyword.as_deref(), Some("MONARCHY"));
    /// assert_eq!(config.unidentified_group, "-1");
    /// ```
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }
}
