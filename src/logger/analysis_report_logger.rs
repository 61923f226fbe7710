use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::code_file_result::CodeFileResult;

pub struct AnalysisReportLogger;

impl AnalysisReportLogger {
    pub fn print_file_report(result: &CodeFileResult) {
        log::info!("\n{}", "=".repeat(60));
        log::info!("📄 {} ({})", result.file_path, result.language);
        log::info!("{}", "=".repeat(60));
        log::info!("📝 {}", result.summary);
        log::info!(
            "📊 Scores: security {} | performance {} | best practices {} | overall {:.1}",
            Self::format_score(result.security_score),
            Self::format_score(result.performance_score),
            Self::format_score(result.best_practices_score),
            result.overall_score,
        );

        if !result.issues.is_empty() {
            log::info!("\n🚨 Issues ({}):", result.issues.len());
            for issue in &result.issues {
                log::info!("   {} [{}] {}", issue.severity.emoji(), issue.category, issue.title);
                log::info!("      {}", issue.description);
                if let Some(line) = issue.line_number {
                    log::info!("      📍 line {}", line);
                }
                if let Some(recommendation) = &issue.recommendation {
                    log::info!("      💡 {}", recommendation);
                }
            }
        }

        if !result.suggestions.is_empty() {
            log::info!("\n✨ Suggestions ({}):", result.suggestions.len());
            for suggestion in &result.suggestions {
                log::info!("   🔧 [{}] {}", suggestion.suggestion_type, suggestion.title);
                log::info!("      {}", suggestion.description);
                if let Some(benefits) = &suggestion.benefits {
                    log::info!("      ➕ {}", benefits);
                }
            }
        }
    }

    pub fn print_summary(summary: &AnalysisSummary) {
        log::info!("\n{}", "=".repeat(60));
        log::info!("📊 Analysis summary: {}", summary.analysis_id);
        log::info!("{}", "=".repeat(60));
        log::info!("📂 Files analyzed: {}", summary.total_files);
        log::info!("🚨 Issues: {}", summary.total_issues);
        log::info!("✨ Suggestions: {}", summary.total_suggestions);
        log::info!("🔒 Average security score: {:.1}", summary.average_security_score);
        log::info!("⚡ Average performance score: {:.1}", summary.average_performance_score);
        log::info!("📐 Average best practices score: {:.1}", summary.average_best_practices_score);
        log::info!("🎯 Average overall score: {:.1}", summary.average_overall_score);

        if !summary.issues_by_severity.is_empty() {
            log::info!("\nIssues by severity:");
            for (severity, count) in &summary.issues_by_severity {
                log::info!("   {} {}: {}", severity.emoji(), severity, count);
            }
        }
        if !summary.suggestions_by_type.is_empty() {
            log::info!("\nSuggestions by type:");
            for (suggestion_type, count) in &summary.suggestions_by_type {
                log::info!("   🔧 {}: {}", suggestion_type, count);
            }
        }
    }

    fn format_score(score: Option<f64>) -> String {
        match score {
            Some(value) => format!("{:.1}", value),
            None => "n/a".to_string(),
        }
    }
}
