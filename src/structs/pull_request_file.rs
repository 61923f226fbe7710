use serde::{Deserialize, Serialize};
use crate::enums::change_kind::ChangeKind;

/// One changed file in a pull request, with whatever before/after content
/// the source host could retrieve for its change kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub file_path: String,
    pub file_name: String,
    pub change_kind: ChangeKind,
    pub before_content: Option<String>,
    pub after_content: Option<String>,
}

impl PullRequestFile {
    /// The content worth sending to the engine: the head version when it
    /// exists, else the base version (deleted files).
    pub fn content_to_analyze(&self) -> Option<&str> {
        self.after_content
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.before_content.as_deref().filter(|c| !c.is_empty()))
    }
}
