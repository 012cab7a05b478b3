/// Initials of a display name: first character of each word, uppercased
/// ("Ava Lee" -> "AL"). Blank names give "?".
pub fn initials(name: &str) -> String {
    let result: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if result.is_empty() {
        "?".to_string()
    } else {
        result
    }
}

/// Placeholder avatar URL built from the initials of `name`
pub fn placeholder_avatar_url(base: &str, name: &str) -> String {
    format!(
        "{}?name={}&background=0D8ABC&color=fff&size=256",
        base,
        urlencoding::encode(&initials(name))
    )
}

/// Split skills into the chips to render and the count collapsed into "+N more"
pub fn split_skills(skills: &[String], max_visible: usize) -> (&[String], usize) {
    let shown = skills.len().min(max_visible);
    (&skills[..shown], skills.len() - shown)
}
