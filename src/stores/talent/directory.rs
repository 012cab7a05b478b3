//! Read-only talent directory
//!
//! Loaded once at startup and handed to the component tree through the
//! Dioxus context. Cloning only bumps the `Arc`.

use std::collections::HashSet;
use std::sync::Arc;

use super::errors::DirectoryError;
use super::lookup;
use super::types::TalentRecord;

/// Directory document shipped with the app
const BUNDLED_DIRECTORY: &str = include_str!("../../../assets/talents.json");

#[derive(Debug, Clone, Default)]
pub struct TalentDirectory {
    records: Arc<Vec<TalentRecord>>,
}

impl TalentDirectory {
    /// Build a directory, rejecting zero ids, duplicate ids and blank names
    pub fn new(records: Vec<TalentRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.id == 0 {
                return Err(DirectoryError::InvalidId { index });
            }
            if !seen.insert(record.id) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(DirectoryError::MissingName(record.id));
            }
        }

        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Parse and validate a JSON array of talent records
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<TalentRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load the bundled directory document
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json(BUNDLED_DIRECTORY)
    }

    pub fn records(&self) -> &[TalentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a raw route parameter to a record
    pub fn find(&self, raw_id: &str) -> Option<&TalentRecord> {
        lookup::find(&self.records, raw_id)
    }
}

/// Load the bundled directory, falling back to an empty one on failure
///
/// With an empty directory every profile route resolves to not-found.
pub fn load_bundled_directory() -> TalentDirectory {
    match TalentDirectory::bundled() {
        Ok(directory) => {
            log::info!("Loaded talent directory with {} records", directory.len());
            directory
        }
        Err(e) => {
            log::error!("Failed to load talent directory: {}", e);
            TalentDirectory::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_directory_is_valid() {
        let directory = TalentDirectory::bundled().unwrap();
        assert!(!directory.is_empty());

        let ava = directory.find("1").unwrap();
        assert_eq!(ava.name, "Ava Lee");
        assert_eq!(ava.skills.len(), 7);
    }

    #[test]
    fn test_preserves_order() {
        let json = r#"[
            { "id": 3, "name": "C", "title": "t", "experienceLevel": "lead" },
            { "id": 1, "name": "A", "title": "t", "experienceLevel": "lead" },
            { "id": 2, "name": "B", "title": "t", "experienceLevel": "lead" }
        ]"#;
        let directory = TalentDirectory::from_json(json).unwrap();
        let ids: Vec<u32> = directory.records().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            { "id": 1, "name": "A", "title": "t", "experienceLevel": "lead" },
            { "id": 1, "name": "B", "title": "t", "experienceLevel": "lead" }
        ]"#;
        let err = TalentDirectory::from_json(json).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateId(1)));
    }

    #[test]
    fn test_rejects_zero_id() {
        let json = r#"[{ "id": 0, "name": "A", "title": "t", "experienceLevel": "lead" }]"#;
        let err = TalentDirectory::from_json(json).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidId { index: 0 }));
    }

    #[test]
    fn test_rejects_blank_name() {
        let json = r#"[{ "id": 4, "name": "  ", "title": "t", "experienceLevel": "lead" }]"#;
        let err = TalentDirectory::from_json(json).unwrap_err();
        assert!(matches!(err, DirectoryError::MissingName(4)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = TalentDirectory::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid talent directory"));
    }

    #[test]
    fn test_empty_directory_finds_nothing() {
        let directory = TalentDirectory::from_json("[]").unwrap();
        assert!(directory.is_empty());
        assert!(directory.find("42").is_none());
    }
}
