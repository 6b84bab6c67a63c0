use crate::models::Severity;
use rand::Rng;

/// Keywords checked in priority order; first matching tier wins
const CRITICAL_KEYWORDS: &[&str] = &["crash", "error", "fail", "broken", "not working", "dead"];
const HIGH_KEYWORDS: &[&str] = &["slow", "lag", "freeze", "problem", "issue"];
const MEDIUM_KEYWORDS: &[&str] = &["performance", "optimization", "maintenance"];

/// Detect severity from the issue description.
///
/// Case-insensitive substring search over a fixed keyword cascade;
/// descriptions matching no tier default to LOW.
pub fn detect_severity(description: &str) -> Severity {
    let description = description.to_lowercase();

    if CRITICAL_KEYWORDS.iter().any(|k| description.contains(k)) {
        Severity::Critical
    } else if HIGH_KEYWORDS.iter().any(|k| description.contains(k)) {
        Severity::High
    } else if MEDIUM_KEYWORDS.iter().any(|k| description.contains(k)) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Base resolution time in hours for a category; unlisted categories
/// fall back to 2 hours
fn base_resolution_time(category: &str) -> f64 {
    match category {
        "HARDWARE" => 4.0,
        "SOFTWARE" => 2.0,
        "NETWORK" => 3.0,
        "PERFORMANCE" => 1.5,
        "MAINTENANCE" => 1.0,
        _ => 2.0,
    }
}

/// Estimated resolution time in hours for a category at a given severity
pub fn estimate_resolution_time(category: &str, severity: Severity) -> f64 {
    base_resolution_time(category) * severity.time_multiplier()
}

/// Priority score: severity weight scaled by half the estimated hours
pub fn priority_score(severity: Severity, estimated_resolution_time: f64) -> f64 {
    severity.priority_weight() * (estimated_resolution_time / 2.0)
}

/// Fixed pool of candidate technicians for a category; unknown
/// categories fall back to tech1
pub fn technician_pool(category: &str) -> &'static [&'static str] {
    match category {
        "HARDWARE" => &["tech1", "tech2"],
        "SOFTWARE" => &["tech3", "tech4"],
        "NETWORK" => &["tech5", "tech6"],
        "PERFORMANCE" => &["tech1", "tech3"],
        "MAINTENANCE" => &["tech2", "tech5"],
        _ => &["tech1"],
    }
}

/// Strategy for picking one technician out of a category's pool.
///
/// The production selector is random; tests inject a deterministic one.
pub trait TechnicianSelector: Send + Sync {
    fn select(&self, candidates: &'static [&'static str]) -> &'static str;
}

/// Uniform random selection, the default strategy
#[derive(Debug, Default)]
pub struct RandomTechnicianSelector;

impl TechnicianSelector for RandomTechnicianSelector {
    fn select(&self, candidates: &'static [&'static str]) -> &'static str {
        let idx = rand::thread_rng().gen_range(0..candidates.len());
        candidates[idx]
    }
}
