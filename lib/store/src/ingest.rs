use crate::{CatalogEntry, Error, RawEntry, Result};
use std::io::BufRead;

/// Parse raw restaurant rows from a JSON Lines reader.
///
/// One JSON object per line; blank lines are skipped. Each parsed row is
/// normalized into a [`CatalogEntry`] immediately, so malformed *fields*
/// degrade to placeholders while a malformed *line* fails with its line
/// number.
pub fn read_raw_entries<R: BufRead>(reader: R) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let raw: RawEntry = serde_json::from_str(trimmed).map_err(|e| Error::Malformed {
            line: number + 1,
            detail: e.to_string(),
        })?;
        entries.push(CatalogEntry::from_raw(raw));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_raw_entries() {
        let input = r#"{"name": "Toit", "cuisines": "Microbrewery", "location": "Indiranagar", "rate": "4.3", "approx_cost(for_two_people)": "1800"}

{"name": "Empire", "location": "Koramangala"}
"#;
        let entries = read_raw_entries(Cursor::new(input)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Toit");
        assert_eq!(entries[0].rating, "4.3");
        assert_eq!(entries[1].name, "Empire");
        assert_eq!(entries[1].cuisine, "Unknown");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "{\"name\": \"Toit\"}\nnot json\n";
        let err = read_raw_entries(Cursor::new(input)).unwrap_err();
        match err {
            Error::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let entries = read_raw_entries(Cursor::new("")).unwrap();
        assert!(entries.is_empty());
    }
}
