use async_trait::async_trait;
use crate::errors::PrlyzerResult;
use crate::structs::pull_request_file::PullRequestFile;
use crate::structs::pull_request_metadata::PullRequestMetadata;

/// The version-control hosting boundary. Implementations are constructed
/// explicitly with their client and credentials; there is no hidden
/// first-call initialization.
#[async_trait]
pub trait SourceHost: Send + Sync {
    async fn get_pull_request_metadata(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<PullRequestMetadata>;

    /// Every changed file of the pull request, with before/after content
    /// fetched according to its change kind.
    async fn get_changed_files(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>>;

    /// The changed files worth analyzing: `get_changed_files` filtered
    /// through the extension allow-list.
    async fn get_code_files_for_analysis(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>>;
}
