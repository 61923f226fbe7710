use serde::{Deserialize, Serialize};

/// Identifies one unit of analysis work. Immutable once an analysis record
/// has been created for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub owner: String,
    pub repository: String,
    pub pr_number: u32,
}

impl AnalysisRequest {
    pub fn new(owner: &str, repository: &str, pr_number: u32) -> Self {
        Self {
            owner: owner.to_string(),
            repository: repository.to_string(),
            pr_number,
        }
    }
}
