//! Talent directory record types
//!
//! Records are deserialized from the bundled JSON document (camelCase keys)
//! and never mutated afterwards.

use serde::Deserialize;

/// A single candidate profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRecord {
    /// Stable identity key, strictly positive and unique per directory
    pub id: u32,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expected_salary: String,
    /// Avatar URI. Empty or unreachable values fall back to a placeholder.
    #[serde(default)]
    pub avatar: String,
    /// Display order is the stored order
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-form level tag, see `utils::experience`
    pub experience_level: String,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub certificates: Vec<CertificateRecord>,
}

/// One entry of a talent's work history
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub role: String,
    pub company: String,
    /// Display string, e.g. "2020 - Present"
    pub period: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// A certification held by a talent
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub name: String,
    pub issuer: String,
    pub issued: String,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": 7,
            "name": "Sam Park",
            "title": "Engineer",
            "experienceLevel": "lead"
        }"#;
        let record: TalentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 7);
        assert!(record.skills.is_empty());
        assert!(record.experiences.is_empty());
        assert!(record.certificates.is_empty());
        assert_eq!(record.avatar, "");
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "id": 1,
            "name": "Ava Lee",
            "title": "Engineer",
            "expectedSalary": "$150k",
            "experienceLevel": "senior",
            "certificates": [
                { "name": "CKA", "issuer": "CNCF", "issued": "2022", "credentialUrl": "https://cncf.io" }
            ]
        }"#;
        let record: TalentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.expected_salary, "$150k");
        assert_eq!(record.experience_level, "senior");
        assert_eq!(
            record.certificates[0].credential_url.as_deref(),
            Some("https://cncf.io")
        );
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let json = r#"{ "id": 1, "title": "Engineer", "experienceLevel": "senior" }"#;
        assert!(serde_json::from_str::<TalentRecord>(json).is_err());
    }
}
