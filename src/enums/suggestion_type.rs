use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionType {
    Refactoring,
    Optimization,
    Convention,
    Enhancement,
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Refactoring => "REFACTORING",
            Self::Optimization => "OPTIMIZATION",
            Self::Convention => "CONVENTION",
            Self::Enhancement => "ENHANCEMENT",
        };
        write!(f, "{}", name)
    }
}
