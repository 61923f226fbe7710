use std::fmt;
use serde::{Deserialize, Serialize};

/// How a file changed within a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl ChangeKind {
    /// Maps the source host's file status strings ("added", "modified",
    /// "removed"/"deleted") onto a change kind.
    pub fn from_host_status(status: &str) -> Option<Self> {
        match status.to_ascii_lowercase().as_str() {
            "added" => Some(Self::Added),
            "modified" | "changed" | "renamed" => Some(Self::Modified),
            "removed" | "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Added => "ADDED",
            Self::Modified => "MODIFIED",
            Self::Deleted => "DELETED",
        };
        write!(f, "{}", name)
    }
}
