use serde::{Deserialize, Serialize};
use crate::enums::effort_level::EffortLevel;
use crate::enums::suggestion_type::SuggestionType;

/// An improvement proposed by the analysis engine that is not a defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub suggested_code: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub effort: Option<EffortLevel>,
}
