//! Filesystem layout helpers for the character store.
//!
//! All character documents live in one flat directory, one JSON file per
//! saved name. Centralizing the path logic here keeps the string constants
//! out of the backend and the tests.

use std::path::PathBuf;

/// Name of the subdirectory storing character documents.
pub const CHARACTERS_SUBDIR: &str = "characters";

/// Convenience wrapper for locating character document paths.
#[derive(Debug, Clone)]
pub struct CharacterLayout {
    pub characters_dir: PathBuf,
}

impl CharacterLayout {
    /// Layout rooted at an explicit characters directory.
    pub fn new(characters_dir: impl Into<PathBuf>) -> Self {
        Self {
            characters_dir: characters_dir.into(),
        }
    }

    /// Path to the JSON document for the given file stem.
    pub fn character_json(&self, stem: &str) -> PathBuf {
        self.characters_dir.join(format!("{stem}.json"))
    }
}
