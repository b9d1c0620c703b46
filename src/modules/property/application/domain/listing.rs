use serde::Deserialize;

/// Amenities arrive either as a JSON array or as a comma-separated string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmenitiesInput {
    List(Vec<String>),
    Csv(String),
}

impl AmenitiesInput {
    pub fn normalize(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            AmenitiesInput::List(items) => items,
            AmenitiesInput::Csv(csv) => csv.split(',').map(str::to_string).collect(),
        };

        raw.into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// Drops blank image URLs.
pub fn normalize_images(images: Vec<String>) -> Vec<String> {
    images
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect()
}

/// Trims a free-text field, mapping blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
