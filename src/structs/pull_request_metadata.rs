use serde::{Deserialize, Serialize};

/// Pull request header data fetched from the source host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestMetadata {
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub state: String,
    pub head_ref: String,
    pub head_sha: String,
}
