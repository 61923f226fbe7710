use serde::{Deserialize, Serialize};
use crate::enums::issue_category::IssueCategory;
use crate::enums::issue_severity::IssueSeverity;

/// A single finding reported by the analysis engine for one file.
/// Category, severity, title and description are mandatory; everything
/// else is whatever the engine chose to include.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub category: IssueCategory,
    pub severity: IssueSeverity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}
