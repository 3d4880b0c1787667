//! CRUD over named, versioned character documents.
//!
//! [`CharacterStore`] wraps a [`StoreBackend`] with the engine's semantics:
//! name validation on save, migrate-on-load with normalized write-back, and
//! the typed error taxonomy the UI surfaces as transient notices.

mod backend;
mod layout;

pub use backend::{sanitize_stem, FsBackend, StoreBackend};
pub use layout::{CharacterLayout, CHARACTERS_SUBDIR};

use chrono::Utc;
use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::warn;

use crate::config;
use crate::migration::{SchemaMigrator, CURRENT_SCHEMA_VERSION};
use crate::profiles::{CharacterProfile, ProfileData};

/// Store failures surfaced to callers as typed results.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Save rejected: empty or whitespace-only profile name.
    #[error("character name must not be empty")]
    InvalidName,
    #[error("no character named '{0}'")]
    NotFound(String),
    /// Network/backend failure; no further subtype is distinguished.
    #[error("character store transport failure: {0}")]
    Transport(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result returned after persisting a document.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// The (trimmed) name the document was stored under.
    pub name: String,
    /// SHA-256 of the serialized document, for change tracking.
    pub hash: String,
}

/// Named-document CRUD with schema migration on every load.
pub struct CharacterStore<B: StoreBackend> {
    backend: B,
    migrator: SchemaMigrator,
}

impl CharacterStore<FsBackend> {
    /// Store over the filesystem backend rooted at an explicit directory.
    pub fn open(characters_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FsBackend::new(characters_dir))
    }

    /// Store rooted per the installation config.
    pub fn open_default() -> anyhow::Result<Self> {
        let config = config::load_or_default()?;
        Ok(Self::new(FsBackend::from_config(&config)?))
    }
}

impl<B: StoreBackend> CharacterStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            migrator: SchemaMigrator::new(),
        }
    }

    /// Persists `data` under `name`, unconditionally overwriting any existing
    /// document with that name.
    ///
    /// Names are case-sensitive distinct keys; note that a filesystem backend
    /// may collide case-insensitively on case-insensitive filesystems.
    pub fn save(&self, name: &str, data: ProfileData) -> StoreResult<SaveOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        let profile = CharacterProfile {
            name: name.to_string(),
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            created: Some(Utc::now()),
            data,
        };
        let payload = serde_json::to_vec_pretty(&profile)?;
        self.backend.put(&profile)?;
        Ok(SaveOutcome {
            name: profile.name,
            hash: compute_hash(&payload),
        })
    }

    /// Loads the named document, migrating it to the current schema.
    ///
    /// When migration changed the document, the normalized form is written
    /// back immediately; a failing write-back is logged and the in-memory
    /// result is still returned.
    pub fn get(&self, name: &str) -> StoreResult<CharacterProfile> {
        let raw = self
            .backend
            .fetch(name)?
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let outcome = self.migrator.migrate(&raw);
        let profile = CharacterProfile {
            name: if raw.name.trim().is_empty() {
                name.to_string()
            } else {
                raw.name.clone()
            },
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            created: raw.created_at(),
            data: outcome.data,
        };
        if outcome.changed {
            if let Err(err) = self.backend.put(&profile) {
                warn!(name, %err, "failed to write back migrated character document");
            }
        }
        Ok(profile)
    }

    /// Enumerates stored names. Order is not guaranteed stable across calls.
    pub fn list(&self) -> StoreResult<Vec<String>> {
        self.backend.fetch_names()
    }

    /// Removes the named document. Deleting an absent name is an error, not a
    /// silent success.
    pub fn delete(&self, name: &str) -> StoreResult<()> {
        if self.backend.remove(name)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(name.to_string()))
        }
    }

    /// Uniformly random saved name, `None` when the store is empty.
    pub fn pick_random(&self) -> StoreResult<Option<String>> {
        let names = self.list()?;
        Ok(names.choose(&mut rand::thread_rng()).cloned())
    }
}

/// Computes a lowercase hex SHA-256 hash of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
