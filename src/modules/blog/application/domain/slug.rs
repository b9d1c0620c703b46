use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern is valid"))
}

/// URL slug for a post title. Falls back to the timestamp when the title
/// has no ASCII letters or digits.
pub fn slugify(title: &str, now: DateTime<Utc>) -> String {
    let lowered = title.to_lowercase();
    let slug = separators()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string();

    if slug.is_empty() {
        now.timestamp_millis().to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_spaces() {
        assert_eq!(
            slugify("  Buying a Home in 2025: 5 Tips!  ", Utc::now()),
            "buying-a-home-in-2025-5-tips"
        );
    }

    #[test]
    fn symbols_only_fall_back_to_timestamp() {
        let now = Utc::now();
        assert_eq!(slugify("!!!", now), now.timestamp_millis().to_string());
    }
}
