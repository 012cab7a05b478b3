//! Talent lookup by route parameter

use super::types::TalentRecord;

/// Parse a route id the lenient way: surrounding whitespace, an optional
/// sign, then the leading run of ASCII digits ("12abc" is 12).
///
/// Anything without leading digits, or too large for an `i64`, is 0.
pub fn parse_talent_id(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// First record whose id matches `raw_id`, or `None` when nothing matches
pub fn find<'a>(records: &'a [TalentRecord], raw_id: &str) -> Option<&'a TalentRecord> {
    let id = parse_talent_id(raw_id);
    records.iter().find(|record| i64::from(record.id) == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talent(id: u32, name: &str) -> TalentRecord {
        TalentRecord {
            id,
            name: name.to_string(),
            title: "Engineer".to_string(),
            location: String::new(),
            description: String::new(),
            expected_salary: String::new(),
            avatar: String::new(),
            skills: Vec::new(),
            experience_level: "senior".to_string(),
            experiences: Vec::new(),
            certificates: Vec::new(),
        }
    }

    #[test]
    fn test_parse_talent_id() {
        assert_eq!(parse_talent_id("42"), 42);
        assert_eq!(parse_talent_id(" 7 "), 7);
        assert_eq!(parse_talent_id("+3"), 3);
        assert_eq!(parse_talent_id("-5"), -5);
        assert_eq!(parse_talent_id("12abc"), 12);
        assert_eq!(parse_talent_id("not-a-number"), 0);
        assert_eq!(parse_talent_id(""), 0);
        assert_eq!(parse_talent_id("-"), 0);
        assert_eq!(parse_talent_id("99999999999999999999999"), 0);
    }

    #[test]
    fn test_find_present_ids() {
        let records = vec![talent(1, "Ava Lee"), talent(2, "Marcus Johnson"), talent(30, "Priya")];

        for record in &records {
            let found = find(&records, &record.id.to_string());
            assert_eq!(found, Some(record));
        }
    }

    #[test]
    fn test_find_missing_id() {
        let records = vec![talent(1, "Ava Lee")];
        assert!(find(&records, "2").is_none());
        assert!(find(&[], "42").is_none());
        assert!(find(&[], "1").is_none());
    }

    #[test]
    fn test_invalid_input_behaves_like_zero() {
        let records = vec![talent(1, "Ava Lee"), talent(2, "Marcus Johnson")];

        let zero = find(&records, "0");
        assert_eq!(find(&records, "not-a-number"), zero);
        assert_eq!(find(&records, ""), zero);
        assert!(zero.is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let records = vec![talent(5, "First"), talent(5, "Second")];
        assert_eq!(find(&records, "5").map(|t| t.name.as_str()), Some("First"));
    }
}
