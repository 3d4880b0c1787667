pub mod applier;
pub mod collector;
pub mod engine;

pub use applier::{apply_profile, apply_to_panel};
pub use collector::collect_panels;
pub use engine::{PanelState, SyncEngine};
