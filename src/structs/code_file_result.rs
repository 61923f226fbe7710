use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::change_kind::ChangeKind;
use crate::structs::engine_report::EngineReport;
use crate::structs::issue::Issue;
use crate::structs::suggestion::Suggestion;

/// The typed outcome of analyzing one file. Created once per file per
/// analysis pass; after creation only `analysis_id` is ever attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeFileResult {
    pub id: Uuid,
    pub analysis_id: Option<Uuid>,
    pub file_path: String,
    pub file_name: String,
    pub change_kind: ChangeKind,
    pub language: String,
    pub original_content: Option<String>,
    pub new_content: Option<String>,
    pub summary: String,
    pub security_score: Option<f64>,
    pub performance_score: Option<f64>,
    pub best_practices_score: Option<f64>,
    pub overall_score: f64,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub created_at: DateTime<Utc>,
}

impl CodeFileResult {
    pub fn from_report(
        file_path: &str,
        file_name: &str,
        change_kind: ChangeKind,
        language: &str,
        code: &str,
        report: EngineReport,
    ) -> Self {
        let overall_score = Self::overall_score(
            report.security_score,
            report.performance_score,
            report.best_practices_score,
        );
        Self {
            id: Uuid::new_v4(),
            analysis_id: None,
            file_path: file_path.to_string(),
            file_name: file_name.to_string(),
            change_kind,
            language: language.to_string(),
            original_content: None,
            new_content: Some(code.to_string()),
            summary: report.summary,
            security_score: report.security_score,
            performance_score: report.performance_score,
            best_practices_score: report.best_practices_score,
            overall_score,
            issues: report.issues,
            suggestions: report.suggestions,
            created_at: Utc::now(),
        }
    }

    /// Mean of the three category scores, or the sentinel zero when any
    /// one of them is missing. Never a partial average.
    pub fn overall_score(
        security: Option<f64>,
        performance: Option<f64>,
        best_practices: Option<f64>,
    ) -> f64 {
        match (security, performance, best_practices) {
            (Some(s), Some(p), Some(b)) => (s + p + b) / 3.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_is_mean_when_all_present() {
        let score = CodeFileResult::overall_score(Some(80.0), Some(70.0), Some(90.0));
        assert!((score - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overall_is_sentinel_zero_when_any_missing() {
        assert_eq!(CodeFileResult::overall_score(None, Some(70.0), Some(90.0)), 0.0);
        assert_eq!(CodeFileResult::overall_score(Some(80.0), None, Some(90.0)), 0.0);
        assert_eq!(CodeFileResult::overall_score(Some(80.0), Some(70.0), None), 0.0);
        assert_eq!(CodeFileResult::overall_score(None, None, None), 0.0);
    }
}
