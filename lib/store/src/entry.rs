use serde::{Deserialize, Serialize};

/// One row of restaurant metadata, as served to callers.
///
/// Entries are normalized exactly once, when a [`RawEntry`] is materialized:
/// missing or blank text fields become `"Unknown"`, missing numeric-ish
/// fields become `"N/A"`, and a blank url becomes `None`. Nothing downstream
/// re-checks fields, so this is the only place defaulting happens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: String,
    pub cost: String,
    pub url: Option<String>,
}

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

fn text_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => default.to_string(),
    }
}

impl CatalogEntry {
    /// Materialize a raw ingestion row into a normalized entry.
    pub fn from_raw(raw: RawEntry) -> Self {
        let url = raw
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Self {
            name: text_or(raw.name, UNKNOWN),
            cuisine: text_or(raw.cuisine, UNKNOWN),
            location: text_or(raw.location, UNKNOWN),
            rating: text_or(raw.rating, NOT_AVAILABLE),
            cost: text_or(raw.cost, NOT_AVAILABLE),
            url,
        }
    }

    /// The combined text this entry is embedded under at ingestion time.
    ///
    /// Query vectors are compared against vectors built from exactly this
    /// string, so the field order here is part of the index format.
    pub fn embedding_text(&self) -> String {
        format!(
            "Name: {}. Cuisine: {}. Location: {}.",
            self.name, self.cuisine, self.location
        )
    }
}

/// One row of the raw ingestion input, before normalization.
///
/// Field names accept both the cleaned form and the column names of the
/// upstream restaurant dataset (`cuisines`, `rate`,
/// `approx_cost(for_two_people)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "cuisines")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "rate")]
    pub rating: Option<String>,
    #[serde(default, alias = "approx_cost(for_two_people)")]
    pub cost: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_complete() {
        let raw = RawEntry {
            name: Some("Toit".to_string()),
            cuisine: Some("Microbrewery".to_string()),
            location: Some("Indiranagar".to_string()),
            rating: Some("4.3".to_string()),
            cost: Some("1800".to_string()),
            url: Some("https://example.com/toit".to_string()),
        };

        let entry = CatalogEntry::from_raw(raw);
        assert_eq!(entry.name, "Toit");
        assert_eq!(entry.cuisine, "Microbrewery");
        assert_eq!(entry.location, "Indiranagar");
        assert_eq!(entry.rating, "4.3");
        assert_eq!(entry.cost, "1800");
        assert_eq!(entry.url.as_deref(), Some("https://example.com/toit"));
    }

    #[test]
    fn test_from_raw_defaults() {
        let entry = CatalogEntry::from_raw(RawEntry::default());
        assert_eq!(entry.name, "Unknown");
        assert_eq!(entry.cuisine, "Unknown");
        assert_eq!(entry.location, "Unknown");
        assert_eq!(entry.rating, "N/A");
        assert_eq!(entry.cost, "N/A");
        assert_eq!(entry.url, None);
    }

    #[test]
    fn test_from_raw_blank_fields_default() {
        let raw = RawEntry {
            name: Some("  ".to_string()),
            rating: Some(String::new()),
            url: Some("   ".to_string()),
            ..RawEntry::default()
        };
        let entry = CatalogEntry::from_raw(raw);
        assert_eq!(entry.name, "Unknown");
        assert_eq!(entry.rating, "N/A");
        assert_eq!(entry.url, None);
    }

    #[test]
    fn test_raw_entry_dataset_aliases() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"name": "Empire", "cuisines": "North Indian", "rate": "4.1", "approx_cost(for_two_people)": "750"}"#,
        )
        .unwrap();
        let entry = CatalogEntry::from_raw(raw);
        assert_eq!(entry.cuisine, "North Indian");
        assert_eq!(entry.rating, "4.1");
        assert_eq!(entry.cost, "750");
    }

    #[test]
    fn test_embedding_text_layout() {
        let raw = RawEntry {
            name: Some("Toit".to_string()),
            cuisine: Some("Microbrewery".to_string()),
            location: Some("Indiranagar".to_string()),
            ..RawEntry::default()
        };
        let entry = CatalogEntry::from_raw(raw);
        assert_eq!(
            entry.embedding_text(),
            "Name: Toit. Cuisine: Microbrewery. Location: Indiranagar."
        );
    }
}
