//! JSON backup import/export.
//!
//! Exports render the full quote list as a pretty-printed JSON array.
//! Imports validate the payload shape before anything reaches the
//! store: the document must be an array, and each record must carry a
//! non-empty string `text`. Categories are optional and default to
//! "Uncategorized".

use crate::storage::models::{Quote, DEFAULT_CATEGORY};

/// Default file name for exported backups.
pub const DEFAULT_BACKUP_NAME: &str = "quotes_backup.json";

/// Errors raised while parsing a backup file.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The document parsed, but is not a JSON array.
    #[error("File content is not a JSON array.")]
    NotAnArray,

    /// A record in the array has the wrong shape.
    #[error("Record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The document is not valid JSON at all.
    #[error("File content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the quote list as a pretty-printed JSON array.
pub fn render_backup(quotes: &[Quote]) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Parses and validates backup file contents.
///
/// Returns the full batch or the first error; a partially-valid file
/// never produces a partial import.
pub fn parse_backup(contents: &str) -> Result<Vec<Quote>, TransferError> {
    let document: serde_json::Value = serde_json::from_str(contents)?;
    let items = document.as_array().ok_or(TransferError::NotAnArray)?;

    let mut quotes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = item.as_object().ok_or_else(|| TransferError::InvalidRecord {
            index,
            reason: "not an object".to_string(),
        })?;

        let text = record
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TransferError::InvalidRecord {
                index,
                reason: "missing or non-string 'text'".to_string(),
            })?
            .trim();
        if text.is_empty() {
            return Err(TransferError::InvalidRecord {
                index,
                reason: "'text' is empty".to_string(),
            });
        }

        let category = match record.get("category") {
            None | Some(serde_json::Value::Null) => DEFAULT_CATEGORY,
            Some(value) => value
                .as_str()
                .ok_or_else(|| TransferError::InvalidRecord {
                    index,
                    reason: "'category' is not a string".to_string(),
                })?
                .trim(),
        };
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };

        quotes.push(Quote::new(text, category));
    }

    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_and_parse_roundtrip() {
        let quotes = vec![
            Quote::new("First", "Alpha"),
            Quote::new("Second", "Beta"),
        ];

        let json = render_backup(&quotes).unwrap();
        let parsed = parse_backup(&json).unwrap();

        assert_eq!(parsed, quotes);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_backup(r#"{"text":"not a list"}"#).unwrap_err();
        assert!(matches!(err, TransferError::NotAnArray));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_backup("not json at all").unwrap_err();
        assert!(matches!(err, TransferError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_non_object_record() {
        let err = parse_backup(r#"["just a string"]"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_missing_text() {
        let err = parse_backup(r#"[{"category":"Life"}]"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        let err = parse_backup(r#"[{"text":"   "}]"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_non_string_category() {
        let err = parse_backup(r#"[{"text":"ok","category":42}]"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_defaults_missing_category() {
        let quotes = parse_backup(r#"[{"text":"ok"},{"text":"also","category":null}]"#).unwrap();
        assert_eq!(quotes[0].category, DEFAULT_CATEGORY);
        assert_eq!(quotes[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_parse_reports_first_bad_index() {
        let err =
            parse_backup(r#"[{"text":"fine"},{"text":""},{"text":"also fine"}]"#).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_backup("[]").unwrap().is_empty());
    }
}
