use serde::{Deserialize, Deserializer, Serialize};
use crate::structs::issue::Issue;
use crate::structs::suggestion::Suggestion;

/// The schema the analysis engine is prompted to produce for one file.
/// Decoding this type is the single place where "might not be valid JSON"
/// handling lives; everything downstream works with typed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineReport {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "coerce_score")]
    pub security_score: Option<f64>,
    #[serde(default, deserialize_with = "coerce_score")]
    pub performance_score: Option<f64>,
    #[serde(default, deserialize_with = "coerce_score")]
    pub best_practices_score: Option<f64>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// Scores are whatever the engine felt like emitting. An absent field
/// stays absent; a present but non-numeric value coerces to 0.0.
fn coerce_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| v.as_f64().unwrap_or(0.0)))
}
