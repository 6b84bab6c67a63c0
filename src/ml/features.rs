use crate::models::WorkLog;
use indexmap::{IndexMap, IndexSet};

/// Tokenize issue text the way both training and scoring see it:
/// lower-case, split on runs of whitespace. No stemming, no stop-word
/// removal, no punctuation stripping; tokens keep attached punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Word-presence statistics extracted from historical work logs.
///
/// The vocabulary is built from whitespace tokens, but a record counts as
/// containing a token when its lowercased summary contains the token as a
/// substring, so "is" counts in every record mentioning "issue".
///
/// Categories and tokens are kept in first-seen order so downstream
/// iteration (and therefore tie-breaking) is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureStats {
    /// Category label -> number of records carrying that label
    category_counts: IndexMap<String, usize>,

    /// Token -> category -> number of records in that category whose
    /// lowercased summary contains the token as a substring
    token_presence: IndexMap<String, IndexMap<String, usize>>,

    /// Total number of training records
    n_records: usize,
}

impl FeatureStats {
    /// Extract statistics from an ordered sequence of work logs
    pub fn extract(records: &[WorkLog]) -> Self {
        let mut category_counts: IndexMap<String, usize> = IndexMap::new();
        let mut vocabulary: IndexSet<String> = IndexSet::new();
        let mut summaries: Vec<(&str, String)> = Vec::with_capacity(records.len());

        for record in records {
            *category_counts.entry(record.category().to_string()).or_insert(0) += 1;
            vocabulary.extend(tokenize(record.summary()));
            summaries.push((record.category(), record.summary().to_lowercase()));
        }

        // A record contributes at most once per token (presence, not frequency)
        let mut token_presence: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
        for token in vocabulary {
            let mut per_category: IndexMap<String, usize> = IndexMap::new();
            for (category, summary) in &summaries {
                if summary.contains(token.as_str()) {
                    *per_category.entry((*category).to_string()).or_insert(0) += 1;
                }
            }
            token_presence.insert(token, per_category);
        }

        Self {
            category_counts,
            token_presence,
            n_records: records.len(),
        }
    }

    /// Categories in first-seen order with their record counts
    pub fn category_counts(&self) -> &IndexMap<String, usize> {
        &self.category_counts
    }

    /// Number of records in a category whose lowercased summary contains
    /// the token as a substring
    pub fn presence(&self, token: &str, category: &str) -> usize {
        self.token_presence
            .get(token)
            .and_then(|per_category| per_category.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Distinct tokens across all records, in first-seen order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.token_presence.keys().map(String::as_str)
    }

    /// Vocabulary size
    pub fn vocab_size(&self) -> usize {
        self.token_presence.len()
    }

    /// Number of known categories
    pub fn n_categories(&self) -> usize {
        self.category_counts.len()
    }

    /// Total number of training records
    pub fn n_records(&self) -> usize {
        self.n_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Screen  Flickers\ton Boot");
        assert_eq!(tokens, vec!["screen", "flickers", "on", "boot"]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        // Intentionally naive: punctuation stays attached to words
        let tokens = tokenize("disk full, won't boot.");
        assert_eq!(tokens, vec!["disk", "full,", "won't", "boot."]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let records = vec![
            WorkLog::new("RESOLVED", "monitor dead"),
            WorkLog::new("RESOLVED", "keyboard broken"),
            WorkLog::new("OPEN", "mouse lag"),
        ];

        let stats = FeatureStats::extract(&records);
        assert_eq!(stats.n_records(), 3);
        let sum: usize = stats.category_counts().values().sum();
        assert_eq!(sum, 3);
        assert_eq!(stats.category_counts()["RESOLVED"], 2);
        assert_eq!(stats.category_counts()["OPEN"], 1);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let records = vec![
            WorkLog::new("OPEN", "a"),
            WorkLog::new("RESOLVED", "b"),
            WorkLog::new("OPEN", "c"),
            WorkLog::new("CLOSED", "d"),
        ];

        let stats = FeatureStats::extract(&records);
        let order: Vec<&String> = stats.category_counts().keys().collect();
        assert_eq!(order, vec!["OPEN", "RESOLVED", "CLOSED"]);
    }

    #[test]
    fn test_presence_counts_records_not_occurrences() {
        // "disk disk disk" is a single record: presence count is 1, not 3
        let records = vec![
            WorkLog::new("OPEN", "disk disk disk"),
            WorkLog::new("OPEN", "disk full"),
        ];

        let stats = FeatureStats::extract(&records);
        assert_eq!(stats.presence("disk", "OPEN"), 2);
        assert_eq!(stats.presence("full", "OPEN"), 1);
        assert_eq!(stats.presence("disk", "RESOLVED"), 0);
    }

    #[test]
    fn test_presence_uses_substring_containment() {
        // "is" counts in both records: standalone in the first, inside
        // "issue" in the second
        let records = vec![
            WorkLog::new("OPEN", "printer issue is annoying"),
            WorkLog::new("OPEN", "printer issue reported"),
            WorkLog::new("RESOLVED", "toner replaced"),
        ];

        let stats = FeatureStats::extract(&records);
        assert_eq!(stats.presence("is", "OPEN"), 2);
        assert_eq!(stats.presence("is", "RESOLVED"), 0);
        // "issue" never appears in the RESOLVED summary
        assert_eq!(stats.presence("issue", "OPEN"), 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut record = WorkLog::new("OPEN", "anything");
        record.status = None;
        record.issue_summary = None;

        let stats = FeatureStats::extract(&[record]);
        assert_eq!(stats.category_counts()["UNKNOWN"], 1);
        assert_eq!(stats.vocab_size(), 0);
    }

    #[test]
    fn test_vocabulary_is_distinct() {
        let records = vec![
            WorkLog::new("OPEN", "printer jam printer"),
            WorkLog::new("RESOLVED", "printer fixed"),
        ];

        let stats = FeatureStats::extract(&records);
        let vocab: Vec<&str> = stats.vocabulary().collect();
        assert_eq!(vocab, vec!["printer", "jam", "fixed"]);
    }
}
