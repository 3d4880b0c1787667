//! Persistence backends for named character documents.
//!
//! The engine consumes a request/response contract, not a storage
//! implementation: fetch one, fetch the name list, put (whole-document
//! replace), remove. [`FsBackend`] is the stock implementation backing the
//! contract with one JSON file per name.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::layout::CharacterLayout;
use super::{StoreError, StoreResult};
use crate::config::{self, AppConfig};
use crate::profiles::{CharacterProfile, RawDocument};

/// Request/response contract against the document store.
///
/// Puts are whole-document replaces; concurrent puts to the same name are
/// last-write-wins with no conflict detection. The engine stays single-writer
/// by design.
pub trait StoreBackend {
    /// Fetch one document by name; `None` when no such name exists.
    fn fetch(&self, name: &str) -> StoreResult<Option<RawDocument>>;

    /// Enumerate stored names. Order is not guaranteed stable across calls.
    fn fetch_names(&self) -> StoreResult<Vec<String>>;

    /// Write the document, replacing any existing one under the same name.
    fn put(&self, document: &CharacterProfile) -> StoreResult<()>;

    /// Remove the named document. Returns `false` when the name was absent.
    fn remove(&self, name: &str) -> StoreResult<bool>;
}

/// Stock backend: one pretty-printed JSON file per name in a flat directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    layout: CharacterLayout,
}

impl FsBackend {
    /// Backend rooted at an explicit characters directory.
    pub fn new(characters_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            layout: CharacterLayout::new(characters_dir),
        }
    }

    /// Backend rooted per the installation config (respecting the
    /// `CHARACTERBASE_HOME` override).
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config::characters_dir(config)?))
    }

    pub fn characters_dir(&self) -> &Path {
        &self.layout.characters_dir
    }

    fn document_path(&self, name: &str) -> std::path::PathBuf {
        self.layout.character_json(&sanitize_stem(name))
    }
}

impl StoreBackend for FsBackend {
    fn fetch(&self, name: &str) -> StoreResult<Option<RawDocument>> {
        let path = self.document_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        match serde_json::from_slice::<RawDocument>(&bytes) {
            Ok(document) => Ok(Some(document)),
            Err(err) => {
                // A corrupt file degrades to an empty document rather than
                // failing the load; saving over it restores a valid file.
                warn!(name, path = %path.display(), %err, "unreadable character document");
                Ok(Some(RawDocument {
                    name: name.to_string(),
                    schema_version: None,
                    created: None,
                    data: Value::Null,
                }))
            }
        }
    }

    fn fetch_names(&self) -> StoreResult<Vec<String>> {
        let dir = &self.layout.characters_dir;
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn put(&self, document: &CharacterProfile) -> StoreResult<()> {
        let path = self.document_path(&document.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(document)?;
        fs::write(&path, payload)?;
        Ok(())
    }

    fn remove(&self, name: &str) -> StoreResult<bool> {
        let path = self.document_path(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}

/// Maps a display name to a filesystem-safe file stem: invalid path
/// characters become underscores, whitespace collapses, leading/trailing
/// dots and spaces are trimmed. An empty result falls back to "character".
pub fn sanitize_stem(name: &str) -> String {
    const INVALID: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let replaced: String = name
        .chars()
        .map(|c| if INVALID.contains(&c) { '_' } else { c })
        .collect();
    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(|c| c == '.' || c == ' ');
    if trimmed.is_empty() {
        "character".to_string()
    } else {
        trimmed.to_string()
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}
