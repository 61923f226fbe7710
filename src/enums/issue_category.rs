use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCategory {
    Security,
    Performance,
    BestPractice,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Security => "SECURITY",
            Self::Performance => "PERFORMANCE",
            Self::BestPractice => "BEST_PRACTICE",
        };
        write!(f, "{}", name)
    }
}
