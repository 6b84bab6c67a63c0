use crate::error::{AppError, Result};
use crate::ml::features::{tokenize, FeatureStats};
use crate::models::WorkLog;
use indexmap::IndexMap;

/// Floor probability substituted for a missing or zero prior so the log
/// score never evaluates `ln(0)`
const PRIOR_FLOOR: f64 = 0.001;

/// Trained Naive Bayes model over work-log categories.
///
/// Immutable after construction; safe to share read-only across
/// concurrent classification calls.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueModel {
    /// Category -> prior probability, in first-seen-in-training order
    priors: IndexMap<String, f64>,

    /// Token -> category -> P(token | category), Laplace smoothed.
    /// Every vocabulary token has an entry for every known category.
    feature_probs: IndexMap<String, IndexMap<String, f64>>,

    /// Total number of training records
    n_records: usize,
}

impl IssueModel {
    /// Train a model from historical work logs.
    ///
    /// Fails with [`AppError::EmptyTrainingSet`] when `records` is empty
    /// rather than producing NaN priors.
    pub fn train(records: &[WorkLog]) -> Result<Self> {
        if records.is_empty() {
            return Err(AppError::EmptyTrainingSet);
        }

        let stats = FeatureStats::extract(records);
        let total = stats.n_records() as f64;
        let n_categories = stats.n_categories();

        let priors: IndexMap<String, f64> = stats
            .category_counts()
            .iter()
            .map(|(category, &count)| (category.clone(), count as f64 / total))
            .collect();

        // Add-one smoothing: tokens unseen in a category still get a
        // nonzero conditional probability
        let mut feature_probs: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
        for token in stats.vocabulary() {
            let mut per_category = IndexMap::new();
            for (category, &cat_count) in stats.category_counts() {
                let presence = stats.presence(token, category);
                let probability = (presence as f64 + 1.0) / (cat_count as f64 + n_categories as f64);
                per_category.insert(category.clone(), probability);
            }
            feature_probs.insert(token.to_string(), per_category);
        }

        tracing::debug!(
            n_records = stats.n_records(),
            n_categories,
            vocab_size = stats.vocab_size(),
            "Trained issue classification model"
        );

        Ok(Self {
            priors,
            feature_probs,
            n_records: stats.n_records(),
        })
    }

    /// Score a description against every known category.
    ///
    /// The item type is accepted for signature compatibility with callers
    /// of the scoring API; it does not currently influence the score.
    pub fn score(&self, issue_description: &str, _item_type: &str) -> CategoryScores {
        let tokens = tokenize(issue_description);

        let mut scores: IndexMap<String, f64> = IndexMap::with_capacity(self.priors.len());
        for (category, &prior) in &self.priors {
            let floored = if prior > 0.0 { prior } else { PRIOR_FLOOR };
            let mut score = floored.ln();

            for token in &tokens {
                // Out-of-vocabulary tokens are skipped, not smoothed
                if let Some(per_category) = self.feature_probs.get(token.as_str()) {
                    if let Some(&probability) = per_category.get(category) {
                        score += probability.ln();
                    }
                }
            }

            scores.insert(category.clone(), score);
        }

        CategoryScores::from_scores(scores)
    }

    /// Category priors in first-seen-in-training order
    pub fn priors(&self) -> &IndexMap<String, f64> {
        &self.priors
    }

    /// Smoothed conditional probability table
    pub fn feature_probs(&self) -> &IndexMap<String, IndexMap<String, f64>> {
        &self.feature_probs
    }

    /// Number of distinct tokens seen during training
    pub fn vocab_size(&self) -> usize {
        self.feature_probs.len()
    }

    /// Number of known categories
    pub fn n_categories(&self) -> usize {
        self.priors.len()
    }

    /// Number of records the model was trained on
    pub fn n_records(&self) -> usize {
        self.n_records
    }
}

/// Raw score vector plus the derived winner and confidence
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    /// Winning category (first-seen wins on exact score ties)
    pub best_category: String,

    /// Min-max normalized dominance of the winning score
    pub confidence: f64,

    /// Per-category log-likelihood scores in category order
    pub scores: IndexMap<String, f64>,
}

impl CategoryScores {
    fn from_scores(scores: IndexMap<String, f64>) -> Self {
        let mut best_category = String::new();
        let mut best = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (category, &score) in &scores {
            // Strict comparison keeps the first-seen category on ties
            if score > best {
                best = score;
                best_category = category.clone();
            }
            if score < min {
                min = score;
            }
            if score > max {
                max = score;
            }
        }

        // Equal scores would divide zero by zero; the spread carries no
        // information, so confidence is pinned at 0.5
        let confidence = if max == min {
            0.5
        } else {
            (best - min) / (max - min)
        };

        Self {
            best_category,
            confidence,
            scores,
        }
    }
}
