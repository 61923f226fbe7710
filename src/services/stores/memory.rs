use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::PrlyzerResult;
use crate::structs::code_file_result::CodeFileResult;
use crate::structs::pull_request_analysis::PullRequestAnalysis;
use crate::traits::analysis_store::AnalysisStore;

/// Concurrent in-memory store. The (owner, repository, pr) index is
/// updated on every save, so concurrent first-time requests for the same
/// triple resolve last-write-wins.
#[derive(Default)]
pub struct InMemoryAnalysisStore {
    analyses: DashMap<Uuid, PullRequestAnalysis>,
    results: DashMap<Uuid, CodeFileResult>,
    triple_index: DashMap<(String, String, u32), Uuid>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn page<T>(items: Vec<T>, page: usize, size: usize) -> Vec<T> {
        items.into_iter().skip(page * size).take(size).collect()
    }

    fn sorted_by_recency(mut items: Vec<PullRequestAnalysis>) -> Vec<PullRequestAnalysis> {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn save_analysis(&self, analysis: &PullRequestAnalysis) -> PrlyzerResult<()> {
        self.triple_index.insert(
            (
                analysis.owner.clone(),
                analysis.repository.clone(),
                analysis.pull_request_number,
            ),
            analysis.id,
        );
        self.analyses.insert(analysis.id, analysis.clone());
        Ok(())
    }

    async fn save_file_result(&self, result: &CodeFileResult) -> PrlyzerResult<()> {
        self.results.insert(result.id, result.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PrlyzerResult<Option<PullRequestAnalysis>> {
        Ok(self.analyses.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_results_for_analysis(&self, analysis_id: Uuid) -> PrlyzerResult<Vec<CodeFileResult>> {
        let mut results: Vec<CodeFileResult> = self
            .results
            .iter()
            .filter(|entry| entry.value().analysis_id == Some(analysis_id))
            .map(|entry| entry.value().clone())
            .collect();
        // stable ordering for reproducible summaries
        results.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.file_path.cmp(&b.file_path)));
        Ok(results)
    }

    async fn find_by_owner_and_repository(
        &self,
        owner: &str,
        repository: &str,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        let matching: Vec<PullRequestAnalysis> = self
            .analyses
            .iter()
            .filter(|entry| entry.value().owner == owner && entry.value().repository == repository)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(Self::page(Self::sorted_by_recency(matching), page, size))
    }

    async fn find_by_status(
        &self,
        status: AnalysisStatus,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        let matching: Vec<PullRequestAnalysis> = self
            .analyses
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(Self::page(Self::sorted_by_recency(matching), page, size))
    }

    async fn find_recent_since(&self, since: DateTime<Utc>) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        let matching: Vec<PullRequestAnalysis> = self
            .analyses
            .iter()
            .filter(|entry| entry.value().created_at >= since)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(Self::sorted_by_recency(matching))
    }

    async fn find_by_owner_repo_and_pr_number(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Option<PullRequestAnalysis>> {
        let key = (owner.to_string(), repository.to_string(), pr_number);
        let id = match self.triple_index.get(&key) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.analyses.get(&id).map(|entry| entry.value().clone()))
    }
}
