pub mod model;
pub mod summarize;

pub use model::{CharacterProfile, FieldValue, ProfileData, RawDocument, SegmentFields};
pub use summarize::{summarize_profile, ProfileSummary};
