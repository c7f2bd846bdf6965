//! Output format types for CLI commands.

use crate::store::{Meaning, WordRecord};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Lookup result: exists plus the word and its meanings when found.
#[derive(Debug, Serialize)]
pub struct LookupListing {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<Meaning>>,
}

impl LookupListing {
    pub fn found(word: WordRecord, meanings: Vec<Meaning>) -> Self {
        Self {
            exists: true,
            word: Some(word),
            meanings: Some(meanings),
        }
    }

    pub fn not_found() -> Self {
        Self {
            exists: false,
            word: None,
            meanings: None,
        }
    }
}
