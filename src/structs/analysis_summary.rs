use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::issue_severity::IssueSeverity;
use crate::enums::suggestion_type::SuggestionType;

/// Derived, never-persisted view over the stored per-file results of one
/// analysis. Produced on demand by the score aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub analysis_id: Uuid,
    pub total_files: usize,
    pub total_issues: usize,
    pub total_suggestions: usize,
    pub average_security_score: f64,
    pub average_performance_score: f64,
    pub average_best_practices_score: f64,
    pub average_overall_score: f64,
    pub issues_by_severity: HashMap<IssueSeverity, usize>,
    pub suggestions_by_type: HashMap<SuggestionType, usize>,
}
