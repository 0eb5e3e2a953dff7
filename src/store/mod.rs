//! In-memory quote store with write-through persistence.
//!
//! All mutation of the quote list goes through `QuoteStore`, which
//! persists the full list after every change. The store is loaded once
//! per command invocation; within a process there is a single writer.

use anyhow::Result;

use crate::storage::db::{Database, KEY_LAST_FILTER, KEY_QUOTES};
use crate::storage::models::{seed_quotes, Quote, DEFAULT_CATEGORY};

/// Filter value that selects every quote.
pub const FILTER_ALL: &str = "all";

/// Errors raised by store-level validation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The add form requires non-empty text.
    #[error("Quote text cannot be empty.")]
    EmptyText,
}

/// Counts from appending a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records appended to the store.
    pub added: usize,
    /// Records skipped because their text matched an existing quote.
    pub skipped: usize,
}

/// The quote collection plus its persistence handle.
pub struct QuoteStore {
    db: Database,
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Loads the store from the database.
    ///
    /// An absent value seeds the store with the example quotes and
    /// persists them immediately. A malformed persisted payload fails
    /// safe to an empty store rather than propagating a parse error.
    pub fn load(db: Database) -> Result<Self> {
        let quotes = match db.get(KEY_QUOTES)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!("Persisted quotes are malformed, starting empty: {e}");
                    Vec::new()
                }
            },
            None => {
                let seeds = seed_quotes();
                db.set(KEY_QUOTES, &serde_json::to_string(&seeds)?)?;
                seeds
            }
        };

        Ok(Self { db, quotes })
    }

    /// Returns the underlying database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// All quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Persists the full quote list (last-writer-wins).
    fn save(&self) -> Result<()> {
        self.db.set(KEY_QUOTES, &serde_json::to_string(&self.quotes)?)
    }

    /// Appends a quote after validation and persists the store.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`StoreError::EmptyText`] and nothing is mutated. A missing or
    /// blank category defaults to "Uncategorized".
    pub fn add_quote(&mut self, text: &str, category: Option<&str>) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText.into());
        }

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        self.quotes.push(Quote::new(text, category));
        self.save()
    }

    /// The distinct categories present in the store, sorted ascending.
    ///
    /// Recomputed fully on each call; store sizes are small.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.quotes.iter().map(|q| q.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// The quotes visible under a filter, in original relative order.
    ///
    /// `"all"` selects everything; any other value selects the
    /// exact-match subset.
    pub fn filtered(&self, filter: &str) -> Vec<&Quote> {
        if filter == FILTER_ALL {
            self.quotes.iter().collect()
        } else {
            self.quotes
                .iter()
                .filter(|q| q.category == filter)
                .collect()
        }
    }

    /// Whether any quote has exactly this text.
    ///
    /// Case and whitespace variants are not considered equal.
    pub fn contains_text(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| q.text == text)
    }

    /// The persisted category filter, defaulting to `"all"`.
    pub fn last_filter(&self) -> Result<String> {
        Ok(self
            .db
            .get(KEY_LAST_FILTER)?
            .unwrap_or_else(|| FILTER_ALL.to_string()))
    }

    /// Persists the category filter for future invocations.
    pub fn set_filter(&self, filter: &str) -> Result<()> {
        self.db.set(KEY_LAST_FILTER, filter)
    }

    /// A uniformly random quote, or `None` when the store is empty.
    pub fn random(&self) -> Option<&Quote> {
        use rand::seq::SliceRandom;
        self.quotes.choose(&mut rand::thread_rng())
    }

    /// Appends a batch of already-validated records.
    ///
    /// With `dedup` enabled, a record whose text exactly matches an
    /// existing quote (including one appended earlier in the same
    /// batch) is skipped. Persists once when anything was added.
    pub fn import(&mut self, records: Vec<Quote>, dedup: bool) -> Result<MergeReport> {
        let mut report = MergeReport::default();

        for record in records {
            if dedup && self.contains_text(&record.text) {
                report.skipped += 1;
                continue;
            }
            self.quotes.push(record);
            report.added += 1;
        }

        if report.added > 0 {
            self.save()?;
        }
        Ok(report)
    }

    /// Conservative merge of remote records into the store.
    ///
    /// A fetched record is appended only when no local record has
    /// exactly equal text; the remote side never overwrites or deletes
    /// a local quote.
    pub fn merge_remote(&mut self, incoming: Vec<Quote>) -> Result<MergeReport> {
        self.import(incoming, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::SERVER_CATEGORY;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> QuoteStore {
        let db = Database::open(&dir.path().join("test.db")).expect("Failed to open database");
        QuoteStore::load(db).expect("Failed to load store")
    }

    fn open_empty_store(dir: &tempfile::TempDir) -> QuoteStore {
        let db = Database::open(&dir.path().join("test.db")).expect("Failed to open database");
        db.set(KEY_QUOTES, "[]").unwrap();
        QuoteStore::load(db).expect("Failed to load store")
    }

    #[test]
    fn test_load_seeds_fresh_database() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.len(), 3);

        // The seed set is persisted immediately
        let raw = store.db().get(KEY_QUOTES).unwrap();
        assert!(raw.is_some());
    }

    #[test]
    fn test_load_does_not_reseed_existing_data() {
        let dir = tempdir().unwrap();
        {
            let mut store = open_empty_store(&dir);
            store.add_quote("Only one", None).unwrap();
        }

        let store = open_store(&dir);
        assert_eq!(store.len(), 1);
        assert_eq!(store.quotes()[0].text, "Only one");
    }

    #[test]
    fn test_load_malformed_payload_fails_safe() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();
        db.set(KEY_QUOTES, "{not valid json").unwrap();

        let store = QuoteStore::load(db).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_quote_grows_store_by_one() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        store.add_quote("Fortune favors the bold.", Some("Courage")).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains_text("Fortune favors the bold."));
    }

    #[test]
    fn test_add_quote_rejects_empty_text() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        let err = store.add_quote("", Some("Courage")).unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_quote_rejects_whitespace_only_text() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        assert!(store.add_quote("   \t ", None).is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_quote_trims_and_defaults_category() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        store.add_quote("  padded  ", None).unwrap();
        store.add_quote("blank category", Some("  ")).unwrap();

        assert_eq!(store.quotes()[0].text, "padded");
        assert_eq!(store.quotes()[0].category, DEFAULT_CATEGORY);
        assert_eq!(store.quotes()[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_add_quote_persists_across_reload() {
        let dir = tempdir().unwrap();
        {
            let mut store = open_empty_store(&dir);
            store.add_quote("Persisted", Some("Memory")).unwrap();
        }

        let store = open_store(&dir);
        assert!(store.contains_text("Persisted"));
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        store.add_quote("a", Some("Zen")).unwrap();
        store.add_quote("b", Some("Art")).unwrap();
        store.add_quote("c", Some("Zen")).unwrap();

        assert_eq!(store.categories(), vec!["Art", "Zen"]);
    }

    #[test]
    fn test_filtered_all_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        store.add_quote("first", Some("A")).unwrap();
        store.add_quote("second", Some("B")).unwrap();
        store.add_quote("third", Some("A")).unwrap();

        let all: Vec<&str> = store.filtered(FILTER_ALL).iter().map(|q| q.text.as_str()).collect();
        assert_eq!(all, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filtered_by_category_exact_match() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        store.add_quote("first", Some("A")).unwrap();
        store.add_quote("second", Some("B")).unwrap();
        store.add_quote("third", Some("A")).unwrap();

        let subset: Vec<&str> = store.filtered("A").iter().map(|q| q.text.as_str()).collect();
        assert_eq!(subset, vec!["first", "third"]);

        assert!(store.filtered("a").is_empty(), "matching is case-sensitive");
    }

    #[test]
    fn test_filter_persists_and_defaults_to_all() {
        let dir = tempdir().unwrap();
        {
            let store = open_empty_store(&dir);
            assert_eq!(store.last_filter().unwrap(), FILTER_ALL);
            store.set_filter("Life").unwrap();
        }

        let store = open_store(&dir);
        assert_eq!(store.last_filter().unwrap(), "Life");
    }

    #[test]
    fn test_random_on_empty_store() {
        let dir = tempdir().unwrap();
        let store = open_empty_store(&dir);
        assert!(store.random().is_none());
    }

    #[test]
    fn test_random_returns_stored_quote() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);
        store.add_quote("the only one", None).unwrap();

        assert_eq!(store.random().unwrap().text, "the only one");
    }

    #[test]
    fn test_merge_remote_dedups_by_exact_text() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);
        store.add_quote("A", Some("Local")).unwrap();

        let incoming = vec![
            Quote::new("A", SERVER_CATEGORY),
            Quote::new("B", SERVER_CATEGORY),
        ];
        let report = store.merge_remote(incoming).unwrap();

        assert_eq!(report, MergeReport { added: 1, skipped: 1 });
        assert_eq!(store.len(), 2);
        // The local record was not overwritten
        assert_eq!(store.quotes()[0].category, "Local");
        assert_eq!(store.quotes()[1].text, "B");
    }

    #[test]
    fn test_merge_remote_case_variants_are_not_equal() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);
        store.add_quote("hello", None).unwrap();

        let report = store
            .merge_remote(vec![Quote::new("Hello", SERVER_CATEGORY)])
            .unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_import_without_dedup_keeps_duplicates() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);
        store.add_quote("same", None).unwrap();

        let report = store
            .import(vec![Quote::new("same", DEFAULT_CATEGORY)], false)
            .unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_import_dedups_within_batch() {
        let dir = tempdir().unwrap();
        let mut store = open_empty_store(&dir);

        let report = store
            .import(
                vec![
                    Quote::new("dup", DEFAULT_CATEGORY),
                    Quote::new("dup", DEFAULT_CATEGORY),
                ],
                true,
            )
            .unwrap();

        assert_eq!(report, MergeReport { added: 1, skipped: 1 });
    }
}
