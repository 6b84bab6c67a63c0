/// Machine learning module for issue classification
///
/// This module provides the classification pipeline:
/// - Word-presence feature extraction from work-log text
/// - Naive Bayes training (priors + Laplace-smoothed conditionals)
/// - Log-likelihood scoring with min-max confidence
/// - Derived attributes (severity, resolution time, technician, priority)

pub mod classifier;
pub mod estimator;
pub mod features;
pub mod service;

pub use classifier::{CategoryScores, IssueModel};
pub use estimator::{
    detect_severity, estimate_resolution_time, priority_score, technician_pool,
    RandomTechnicianSelector, TechnicianSelector,
};
pub use features::{tokenize, FeatureStats};
pub use service::{IssueClassificationService, ModelStats};
