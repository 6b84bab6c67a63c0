use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Issue severity derived from the description text
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Multiplier applied to a category's base resolution time
    pub fn time_multiplier(&self) -> f64 {
        match self {
            Severity::Low => 0.5,
            Severity::Medium => 1.0,
            Severity::High => 2.0,
            Severity::Critical => 4.0,
        }
    }

    /// Weight used in the priority formula
    pub fn priority_weight(&self) -> f64 {
        match self {
            Severity::Low => 1.0,
            Severity::Medium => 2.0,
            Severity::High => 3.0,
            Severity::Critical => 4.0,
        }
    }
}

/// A classification request as supplied by the surrounding request handler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    /// Free-text description of the issue
    pub issue_description: String,

    /// Type of the affected ICT item. Accepted for API compatibility with
    /// the caller's shape; the scorer does not currently use it.
    pub item_type: String,
}

impl ClassificationRequest {
    pub fn new(issue_description: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            issue_description: issue_description.into(),
            item_type: item_type.into(),
        }
    }
}

/// Final classification result returned to the caller.
///
/// Pure data assembly; every field is computed upstream and composed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Winning category (a work-log status label)
    pub category: String,

    /// Normalized dominance of the winning score (0.0 - 1.0)
    pub confidence: f64,

    /// Severity derived from keyword detection
    pub severity: Severity,

    /// Estimated resolution time in hours
    pub estimated_resolution_time: f64,

    /// Suggested technician identifier
    pub suggested_technician: String,

    /// Priority score (non-negative; higher is more urgent)
    pub priority: f64,
}

impl ClassificationResult {
    /// Assemble a result from its computed parts
    pub fn new(
        category: String,
        confidence: f64,
        severity: Severity,
        estimated_resolution_time: f64,
        suggested_technician: String,
        priority: f64,
    ) -> Self {
        Self {
            category,
            confidence,
            severity,
            estimated_resolution_time,
            suggested_technician,
            priority,
        }
    }
}
