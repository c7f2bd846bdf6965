//! Normalized word text type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The text of a vocabulary entry, normalized for lookup.
///
/// Word text is the unique key of the collection. It is normalized so that
/// `Apple`, ` apple ` and `APPLE` all refer to the same entry.
///
/// # Normalization
/// - Surrounding whitespace is trimmed
/// - Converted to lowercase
///
/// # Examples
///
/// ```
/// use vocab::domain::WordText;
///
/// let word = WordText::new("  Ubiquitous ").unwrap();
/// assert_eq!(word.as_str(), "ubiquitous");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WordText(String); // Always stored trimmed and lowercase

/// Error returned when parsing invalid word text.
#[derive(Debug, Clone)]
pub struct ParseWordTextError(String);

impl fmt::Display for ParseWordTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseWordTextError {}

impl WordText {
    /// Creates a new WordText from a string.
    ///
    /// The input is normalized (trimmed, converted to lowercase).
    ///
    /// # Errors
    ///
    /// Returns `ParseWordTextError` if the text is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseWordTextError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseWordTextError("word text cannot be empty".to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordText(\"{}\")", self.0)
    }
}

impl FromStr for WordText {
    type Err = ParseWordTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for WordText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WordText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
