use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rows scanned per lookup
pub const LOCATION_SCAN_LIMIT: u64 = 200;
/// Suggestions returned per lookup
pub const LOCATION_RESULT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSuggestion {
    pub city: String,
    pub postal_code: String,
}

/// Escapes LIKE wildcards so user input matches literally.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds de-duplicated, sorted suggestions from `(city, zip)` rows.
pub fn build_suggestions(rows: Vec<(Option<String>, Option<String>)>) -> Vec<LocationSuggestion> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for (city, zip) in rows {
        let city = city.unwrap_or_default().trim().to_string();
        let postal_code = zip.unwrap_or_default().trim().to_string();

        if city.is_empty() && postal_code.is_empty() {
            continue;
        }

        let key = format!("{}-{}", postal_code, city).to_lowercase();
        if !seen.insert(key) {
            continue;
        }

        results.push(LocationSuggestion { city, postal_code });
    }

    results.sort_by(compare_suggestions);
    results.truncate(LOCATION_RESULT_LIMIT);
    results
}

// Entries with a postal code come first, ordered by code then city
fn compare_suggestions(a: &LocationSuggestion, b: &LocationSuggestion) -> Ordering {
    (a.postal_code.is_empty(), &a.postal_code, &a.city).cmp(&(
        b.postal_code.is_empty(),
        &b.postal_code,
        &b.city,
    ))
}
