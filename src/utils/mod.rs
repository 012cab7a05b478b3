// Utility functions
// Helper functions for common operations

pub mod experience;
pub mod format;
pub mod lookup_state;

pub use experience::experience_years;
pub use format::{placeholder_avatar_url, split_skills};
pub use lookup_state::LookupState;
