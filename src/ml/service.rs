use crate::error::Result;
use crate::ml::classifier::IssueModel;
use crate::ml::estimator::{
    detect_severity, estimate_resolution_time, priority_score, technician_pool,
    RandomTechnicianSelector, TechnicianSelector,
};
use crate::models::{ClassificationRequest, ClassificationResult, WorkLog};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Issue classification service.
///
/// Trains a fresh model from the supplied work-log history at construction
/// and answers classification requests against it. The trained model is
/// never mutated afterwards, so a service instance can be shared read-only
/// across concurrent callers.
pub struct IssueClassificationService {
    /// Trained model
    model: IssueModel,

    /// Technician selection strategy
    selector: Box<dyn TechnicianSelector>,
}

impl IssueClassificationService {
    /// Train a service from historical work logs
    pub fn from_work_logs(records: &[WorkLog]) -> Result<Self> {
        let model = IssueModel::train(records)?;

        info!(
            n_records = model.n_records(),
            n_categories = model.n_categories(),
            vocab_size = model.vocab_size(),
            "Issue classification model trained"
        );

        Ok(Self {
            model,
            selector: Box::new(RandomTechnicianSelector),
        })
    }

    /// Replace the technician selection strategy
    pub fn with_selector(mut self, selector: Box<dyn TechnicianSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Classify an issue description.
    ///
    /// Everything except the suggested technician is deterministic for a
    /// given trained model; the technician is drawn from the winning
    /// category's fixed candidate pool by the configured selector.
    pub fn classify(&self, request: &ClassificationRequest) -> ClassificationResult {
        let scored = self
            .model
            .score(&request.issue_description, &request.item_type);

        let severity = detect_severity(&request.issue_description);
        let estimated_resolution_time =
            estimate_resolution_time(&scored.best_category, severity);
        let suggested_technician = self
            .selector
            .select(technician_pool(&scored.best_category))
            .to_string();
        let priority = priority_score(severity, estimated_resolution_time);

        debug!(
            category = %scored.best_category,
            confidence = scored.confidence,
            severity = %severity,
            priority,
            "Classified issue"
        );

        ClassificationResult::new(
            scored.best_category,
            scored.confidence,
            severity,
            estimated_resolution_time,
            suggested_technician,
            priority,
        )
    }

    /// Access the trained model
    pub fn model(&self) -> &IssueModel {
        &self.model
    }

    /// Statistics about the trained model
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            n_records: self.model.n_records(),
            n_categories: self.model.n_categories(),
            vocab_size: self.model.vocab_size(),
            categories: self.model.priors().keys().cloned().collect(),
        }
    }
}

// The selector trait object has no Debug bound, so the derive is not available
impl fmt::Debug for IssueClassificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueClassificationService")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Trained-model statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStats {
    pub n_records: usize,
    pub n_categories: usize,
    pub vocab_size: usize,
    pub categories: Vec<String>,
}
