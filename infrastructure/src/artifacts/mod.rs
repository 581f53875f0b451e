//! Local storage of generated charts and reports.

mod store;

pub use store::{ArtifactStore, StoredArtifacts};
