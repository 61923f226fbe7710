use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::structs::engine_report::EngineReport;

/// Turns the engine's raw text into a typed report. The upstream text is
/// LLM-generated and not contractually JSON: conversational wrapper prose
/// and markdown code fences are tolerated, but once they are stripped the
/// remainder must decode as the report schema.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: &str) -> PrlyzerResult<EngineReport> {
        let candidate = Self::extract_candidate(raw);

        let report: EngineReport = serde_json::from_str(&candidate).map_err(|e| {
            PrlyzerError::malformed_response(
                &e.to_string(),
                Some(Self::truncate_for_context(&candidate)),
            )
        })?;

        Self::validate(&report)?;
        Ok(report)
    }

    /// Strips code-fence markers, then takes the substring between the
    /// first '{' and the last '}' when both exist in order; otherwise the
    /// trimmed remainder stands as-is.
    fn extract_candidate(raw: &str) -> String {
        let cleaned = raw.replace("```json", "").replace("```", "");

        match (cleaned.find('{'), cleaned.rfind('}')) {
            (Some(start), Some(end)) if start < end => cleaned[start..=end].to_string(),
            _ => cleaned.trim().to_string(),
        }
    }

    fn validate(report: &EngineReport) -> PrlyzerResult<()> {
        for issue in &report.issues {
            if issue.title.trim().is_empty() || issue.description.trim().is_empty() {
                return Err(PrlyzerError::malformed_response(
                    "issue with empty title or description",
                    None,
                ));
            }
        }
        for suggestion in &report.suggestions {
            if suggestion.title.trim().is_empty() || suggestion.description.trim().is_empty() {
                return Err(PrlyzerError::malformed_response(
                    "suggestion with empty title or description",
                    None,
                ));
            }
        }
        Ok(())
    }

    fn truncate_for_context(candidate: &str) -> &str {
        let end = candidate
            .char_indices()
            .nth(200)
            .map(|(i, _)| i)
            .unwrap_or(candidate.len());
        &candidate[..end]
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
