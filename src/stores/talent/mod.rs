//! Talent directory store
//!
//! Record types, load-time validation and id lookup.

pub mod directory;
pub mod errors;
pub mod lookup;
pub mod types;

pub use directory::{load_bundled_directory, TalentDirectory};
pub use types::{CertificateRecord, ExperienceRecord, TalentRecord};
