use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Category label used when a work log carries no status
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN";

/// A historical work-log entry used as one training record.
///
/// Field names mirror the JSON shape of the work-log store, so a fetched
/// collection can be deserialized directly into training input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    /// Who reported the issue
    #[serde(default)]
    pub opened_by: String,

    /// Technician the issue was assigned to
    #[serde(default)]
    pub assigned_to: Option<String>,

    /// Affected asset identifier
    #[serde(default)]
    pub item_id: Option<String>,

    /// Free-text summary of the issue
    #[serde(default)]
    pub issue_summary: Option<String>,

    /// Resolution notes, once closed
    #[serde(default)]
    pub resolution: Option<String>,

    /// Work-log status label (e.g. OPEN, IN_PROGRESS, RESOLVED, CLOSED);
    /// doubles as the classification category
    #[serde(default)]
    pub status: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Closing timestamp, if the log was closed
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl WorkLog {
    /// Create a new work log with the fields the classifier cares about
    pub fn new(status: impl Into<String>, issue_summary: impl Into<String>) -> Self {
        Self {
            opened_by: String::new(),
            assigned_to: None,
            item_id: None,
            issue_summary: Some(issue_summary.into()),
            resolution: None,
            status: Some(status.into()),
            created_at: Some(Utc::now()),
            closed_at: None,
        }
    }

    /// Category label for training; absent statuses default to `UNKNOWN`
    pub fn category(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Issue text for training; absent summaries default to the empty string
    pub fn summary(&self) -> &str {
        self.issue_summary.as_deref().unwrap_or("")
    }
}

/// Load a JSON array of work logs from a file
pub fn load_work_logs<P: AsRef<Path>>(path: P) -> Result<Vec<WorkLog>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let logs = serde_json::from_reader(reader)?;
    Ok(logs)
}
