pub mod config;
pub mod migration;
pub mod panels;
pub mod profiles;
pub mod store;
pub mod sync;

// Re-export commonly used types for convenience.
pub use config::{AppConfig, SyncSettings};
pub use migration::{SchemaMigrator, CURRENT_SCHEMA_VERSION};
pub use panels::{Control, ControlKind, NullRedraw, Panel, RedrawSink};
pub use profiles::{CharacterProfile, FieldValue, ProfileData};
pub use store::{CharacterStore, FsBackend, StoreBackend, StoreError};
pub use sync::{apply_profile, collect_panels, SyncEngine};
