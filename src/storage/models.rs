//! Core data model for Quotable.
//!
//! A quote is the sole domain entity: a piece of text grouped under a
//! free-text category label.

use serde::{Deserialize, Serialize};

/// Category assigned when a quote is added without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Category tag applied to quotes pulled from the remote source.
pub const SERVER_CATEGORY: &str = "Server Data";

/// A single quote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quotable content. Never empty for records created through `add`.
    pub text: String,

    /// Free-text label used for grouping and filtering.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Quote {
    /// Creates a quote from already-validated parts.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// The example quotes a fresh database starts with.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Inspiration",
        ),
        Quote::new(
            "The best way to predict the future is to create it.",
            "Motivation",
        ),
        Quote::new("Don't watch the clock; do what it does. Keep going.", "Life"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serialization_roundtrip() {
        let quote = Quote::new("Stay hungry, stay foolish.", "Inspiration");
        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }

    #[test]
    fn test_quote_deserialize_missing_category_defaults() {
        let parsed: Quote = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(parsed.text, "Hello");
        assert_eq!(parsed.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_seed_quotes_shape() {
        let seeds = seed_quotes();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|q| !q.text.is_empty()));
        assert!(seeds.iter().all(|q| !q.category.is_empty()));
    }
}
