/// Experience level tags a talent record may carry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceLevel {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Lead,
    Principal,
    /// Any tag outside the known vocabulary
    Unknown,
}

impl ExperienceLevel {
    /// Case-insensitive, ignores surrounding whitespace. Never fails.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "entry-level" => ExperienceLevel::EntryLevel,
            "junior" => ExperienceLevel::Junior,
            "mid-level" => ExperienceLevel::MidLevel,
            "senior" => ExperienceLevel::Senior,
            "lead" => ExperienceLevel::Lead,
            "principal" => ExperienceLevel::Principal,
            _ => ExperienceLevel::Unknown,
        }
    }

    pub fn years_label(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "0-1 Years",
            ExperienceLevel::Junior => "1-3 Years",
            ExperienceLevel::MidLevel => "3-6 Years",
            ExperienceLevel::Senior => "6-10 Years",
            ExperienceLevel::Lead => "10+ Years",
            ExperienceLevel::Principal => "15+ Years",
            ExperienceLevel::Unknown => "5+ Years",
        }
    }
}

/// Human-readable year range for a raw experience level tag
pub fn experience_years(level: &str) -> &'static str {
    ExperienceLevel::from_str(level).years_label()
}
