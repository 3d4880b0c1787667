use std::path::PathBuf;

use characterbase::config::SyncSettings;
use characterbase::store::{CharacterStore, FsBackend};
use characterbase::sync::SyncEngine;
use tempfile::TempDir;

/// Harness giving each test an isolated characters directory.
pub struct StoreHarness {
    workspace: TempDir,
}

impl StoreHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn characters_dir(&self) -> PathBuf {
        self.workspace.path().join("characters")
    }

    pub fn store(&self) -> CharacterStore<FsBackend> {
        CharacterStore::open(self.characters_dir())
    }

    pub fn engine(&self) -> SyncEngine<FsBackend> {
        SyncEngine::new(self.store(), SyncSettings::default())
    }

    /// On-disk path of the document stored under the given file stem.
    pub fn document_path(&self, stem: &str) -> PathBuf {
        self.characters_dir().join(format!("{stem}.json"))
    }
}

mod migration_load;
mod profile_summary;
mod round_trip;
