//! Issue-classification core for ICT asset management.
//!
//! Trains a Naive Bayes text classifier from historical work logs and maps
//! new issue descriptions onto a category, confidence, severity, estimated
//! resolution time, suggested technician, and priority score. The model is
//! retrained from scratch on every construction and never persisted.
//!
//! ```
//! use ict_issue_triage::ml::IssueClassificationService;
//! use ict_issue_triage::models::{ClassificationRequest, WorkLog};
//!
//! let history = vec![
//!     WorkLog::new("HARDWARE", "power supply dead"),
//!     WorkLog::new("SOFTWARE", "application keeps crashing"),
//! ];
//!
//! let service = IssueClassificationService::from_work_logs(&history)?;
//! let result = service.classify(&ClassificationRequest::new(
//!     "computer crash and not working",
//!     "Desktop",
//! ));
//! assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
//! # Ok::<(), ict_issue_triage::error::AppError>(())
//! ```

pub mod config;
pub mod error;
pub mod ml;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
pub use ml::{IssueClassificationService, IssueModel};
pub use models::{ClassificationRequest, ClassificationResult, Severity, WorkLog};
