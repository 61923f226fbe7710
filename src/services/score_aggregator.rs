use std::collections::HashMap;
use uuid::Uuid;
use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::code_file_result::CodeFileResult;

/// Combines the stored per-file results of one analysis into a summary.
/// Pure function of its input; nothing here touches the store.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Category averages divide the sum of present values by the total
    /// file count, not by the count of files that reported the category.
    /// A category reported by a subset of files is therefore understated;
    /// that behavior is intentional and pinned by tests.
    pub fn summarize(analysis_id: Uuid, results: &[CodeFileResult]) -> AnalysisSummary {
        let total_files = results.len();
        let denominator = total_files.max(1) as f64;

        let mut issues_by_severity = HashMap::new();
        let mut suggestions_by_type = HashMap::new();
        let mut total_issues = 0;
        let mut total_suggestions = 0;

        for result in results {
            total_issues += result.issues.len();
            total_suggestions += result.suggestions.len();
            for issue in &result.issues {
                *issues_by_severity.entry(issue.severity).or_insert(0) += 1;
            }
            for suggestion in &result.suggestions {
                *suggestions_by_type.entry(suggestion.suggestion_type).or_insert(0) += 1;
            }
        }

        AnalysisSummary {
            analysis_id,
            total_files,
            total_issues,
            total_suggestions,
            average_security_score: Self::average_present(
                results.iter().map(|r| r.security_score),
                denominator,
            ),
            average_performance_score: Self::average_present(
                results.iter().map(|r| r.performance_score),
                denominator,
            ),
            average_best_practices_score: Self::average_present(
                results.iter().map(|r| r.best_practices_score),
                denominator,
            ),
            average_overall_score: results.iter().map(|r| r.overall_score).sum::<f64>()
                / denominator,
            issues_by_severity,
            suggestions_by_type,
        }
    }

    // Absent values are skipped in the sum but still weigh on the
    // denominator.
    fn average_present(values: impl Iterator<Item = Option<f64>>, denominator: f64) -> f64 {
        values.flatten().sum::<f64>() / denominator
    }
}
