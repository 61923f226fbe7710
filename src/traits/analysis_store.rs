use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::PrlyzerResult;
use crate::structs::code_file_result::CodeFileResult;
use crate::structs::pull_request_analysis::PullRequestAnalysis;

/// Durable persistence boundary for analyses and their per-file results.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save_analysis(&self, analysis: &PullRequestAnalysis) -> PrlyzerResult<()>;

    async fn save_file_result(&self, result: &CodeFileResult) -> PrlyzerResult<()>;

    async fn find_by_id(&self, id: Uuid) -> PrlyzerResult<Option<PullRequestAnalysis>>;

    async fn find_results_for_analysis(&self, analysis_id: Uuid) -> PrlyzerResult<Vec<CodeFileResult>>;

    async fn find_by_owner_and_repository(
        &self,
        owner: &str,
        repository: &str,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>>;

    async fn find_by_status(
        &self,
        status: AnalysisStatus,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>>;

    async fn find_recent_since(&self, since: DateTime<Utc>) -> PrlyzerResult<Vec<PullRequestAnalysis>>;

    /// At most one match per triple is expected once an analysis has
    /// completed; concurrent first-time requests resolve last-write-wins.
    async fn find_by_owner_repo_and_pr_number(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Option<PullRequestAnalysis>>;
}
