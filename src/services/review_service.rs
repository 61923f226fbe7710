use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::change_kind::ChangeKind;
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::helpers::language;
use crate::services::file_analyzer::FileAnalyzer;
use crate::services::score_aggregator::ScoreAggregator;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::code_file_result::CodeFileResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::pull_request_analysis::PullRequestAnalysis;
use crate::traits::analysis_store::AnalysisStore;
use crate::traits::source_host::SourceHost;

/// Handle for one in-flight pull request analysis. Cancellation is
/// advisory: it stops scheduling further file analyses but does not
/// pre-empt an engine call that is already running.
pub struct AnalysisHandle {
    cancel_flag: Arc<AtomicBool>,
    task: JoinHandle<PrlyzerResult<PullRequestAnalysis>>,
}

impl AnalysisHandle {
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub async fn wait(self) -> PrlyzerResult<PullRequestAnalysis> {
        self.task
            .await
            .map_err(|e| PrlyzerError::system_error("analysis task", &e.to_string()))?
    }
}

/// Drives the end-to-end pull request analysis: fetch the changed files,
/// analyze each one with per-file failure isolation, persist results, and
/// walk the analysis record through its lifecycle.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn AnalysisStore>,
    source_host: Arc<dyn SourceHost>,
    file_analyzer: Arc<FileAnalyzer>,
    config: AnalysisConfig,
}

impl ReviewService {
    pub fn new(
        store: Arc<dyn AnalysisStore>,
        source_host: Arc<dyn SourceHost>,
        file_analyzer: Arc<FileAnalyzer>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            store,
            source_host,
            file_analyzer,
            config,
        }
    }

    /// Spawns the whole pull request pass as one unit of asynchronous work.
    pub fn start_analysis(&self, owner: &str, repository: &str, pr_number: u32) -> AnalysisHandle {
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let request = AnalysisRequest::new(owner, repository, pr_number);
        let service = self.clone();
        let flag = Arc::clone(&cancel_flag);
        let task = tokio::spawn(async move { service.run_analysis(request, flag).await });
        AnalysisHandle { cancel_flag, task }
    }

    pub async fn run_analysis(
        self,
        request: AnalysisRequest,
        cancel_flag: Arc<AtomicBool>,
    ) -> PrlyzerResult<PullRequestAnalysis> {
        log::info!(
            "🔍 Starting analysis for PR {}/{}#{}",
            request.owner, request.repository, request.pr_number
        );

        let existing = self
            .store
            .find_by_owner_repo_and_pr_number(&request.owner, &request.repository, request.pr_number)
            .await?;

        let mut analysis = match existing {
            Some(record) if record.status == AnalysisStatus::Completed => {
                // idempotent re-entry: no re-analysis, no duplicate files
                log::info!(
                    "Analysis {} already completed, returning stored record",
                    record.id
                );
                return Ok(record);
            }
            Some(record) if !record.status.is_terminal() => record,
            _ => PullRequestAnalysis::new(&request.owner, &request.repository, request.pr_number),
        };

        if analysis.status == AnalysisStatus::Pending {
            analysis.set_status(AnalysisStatus::InProgress)?;
        }
        self.store.save_analysis(&analysis).await?;

        match self.analyze_files(&mut analysis, &cancel_flag).await {
            Ok(()) => {
                // an external cancellation may have already parked the
                // stored record in a terminal state; leave it untouched
                if let Some(stored) = self.find_externally_cancelled(analysis.id).await? {
                    log::info!("Analysis {} was cancelled externally", analysis.id);
                    return Ok(stored);
                }
                analysis.set_status(AnalysisStatus::Completed)?;
                self.store.save_analysis(&analysis).await?;
                log::info!("✅ Analysis {} completed", analysis.id);
                Ok(analysis)
            }
            Err(e) => {
                log::error!("❌ Analysis {} failed: {}", analysis.id, e);
                // same re-read as the success branch: a record parked in
                // CANCELLED underneath us stays exactly as it is
                if self.find_externally_cancelled(analysis.id).await?.is_some() {
                    log::info!("Analysis {} was cancelled externally", analysis.id);
                    return Err(e);
                }
                analysis.error_message = Some(e.user_message());
                analysis.set_status(AnalysisStatus::Failed)?;
                self.store.save_analysis(&analysis).await?;
                Err(e)
            }
        }
    }

    async fn find_externally_cancelled(
        &self,
        analysis_id: Uuid,
    ) -> PrlyzerResult<Option<PullRequestAnalysis>> {
        Ok(self
            .store
            .find_by_id(analysis_id)
            .await?
            .filter(|stored| stored.status == AnalysisStatus::Cancelled))
    }

    /// Analyzes every file of the pull request. Failures inside one
    /// file's analysis are logged and swallowed; anything else (gateway,
    /// persistence) aborts the whole pass.
    async fn analyze_files(
        &self,
        analysis: &mut PullRequestAnalysis,
        cancel_flag: &AtomicBool,
    ) -> PrlyzerResult<()> {
        let metadata = self
            .source_host
            .get_pull_request_metadata(&analysis.owner, &analysis.repository, analysis.pull_request_number)
            .await?;
        analysis.branch_name = Some(metadata.head_ref.clone());
        analysis.title = Some(metadata.title.clone());
        analysis.commit_sha = Some(metadata.head_sha.clone());
        self.store.save_analysis(analysis).await?;

        let files = self
            .source_host
            .get_code_files_for_analysis(&analysis.owner, &analysis.repository, analysis.pull_request_number)
            .await?;
        log::info!(
            "📂 {} analyzable files in {}/{}#{}",
            files.len(), analysis.owner, analysis.repository, analysis.pull_request_number
        );

        for file in files {
            if cancel_flag.load(Ordering::Relaxed) {
                log::info!("Cancellation requested, not scheduling further file analyses");
                break;
            }

            let Some(code) = file.content_to_analyze() else {
                log::warn!("Skipping {}: no content available", file.file_path);
                continue;
            };
            if code.len() > self.config.max_file_size {
                log::warn!(
                    "Skipping {}: {} bytes exceeds limit {}",
                    file.file_path, code.len(), self.config.max_file_size
                );
                continue;
            }

            let language = language::language_from_file_name(&file.file_name);
            match self
                .file_analyzer
                .analyze_code(&file.file_path, &file.file_name, file.change_kind, language, code)
                .await
            {
                Ok(mut result) => {
                    result.analysis_id = Some(analysis.id);
                    result.original_content = file.before_content.clone();
                    self.store.save_file_result(&result).await?;
                }
                Err(e) if e.is_file_local() => {
                    // one bad file never aborts the whole pull request pass
                    log::error!("❌ Analysis failed for {}: {}", file.file_path, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Analyzes one piece of code outside any pull request context.
    pub async fn analyze_single_file(
        &self,
        file_path: &str,
        language_hint: Option<&str>,
        code: &str,
    ) -> PrlyzerResult<CodeFileResult> {
        let file_name = language::file_name_from_path(file_path);
        let detected = language::language_from_file_name(file_name);
        let language = language_hint.unwrap_or(detected);
        self.file_analyzer
            .analyze_code(file_path, file_name, ChangeKind::Modified, language, code)
            .await
    }

    /// Aggregated view over the stored per-file results of one analysis.
    pub async fn get_summary(&self, analysis_id: Uuid) -> PrlyzerResult<AnalysisSummary> {
        let analysis = self
            .store
            .find_by_id(analysis_id)
            .await?
            .ok_or_else(|| PrlyzerError::not_found("Analysis", &analysis_id.to_string()))?;
        let results = self.store.find_results_for_analysis(analysis.id).await?;
        Ok(ScoreAggregator::summarize(analysis.id, &results))
    }

    pub async fn get_file_results(&self, analysis_id: Uuid) -> PrlyzerResult<Vec<CodeFileResult>> {
        self.store.find_results_for_analysis(analysis_id).await
    }

    pub async fn get_analysis(&self, analysis_id: Uuid) -> PrlyzerResult<PullRequestAnalysis> {
        self.store
            .find_by_id(analysis_id)
            .await?
            .ok_or_else(|| PrlyzerError::not_found("Analysis", &analysis_id.to_string()))
    }

    /// External cancellation request. Valid out of PENDING or IN_PROGRESS
    /// only; attempting to cancel a terminal analysis is a caller error.
    pub async fn cancel_analysis(&self, analysis_id: Uuid) -> PrlyzerResult<PullRequestAnalysis> {
        let mut analysis = self.get_analysis(analysis_id).await?;
        analysis.set_status(AnalysisStatus::Cancelled)?;
        self.store.save_analysis(&analysis).await?;
        Ok(analysis)
    }

    pub async fn get_repository_analyses(
        &self,
        owner: &str,
        repository: &str,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        self.store
            .find_by_owner_and_repository(owner, repository, page, size)
            .await
    }

    pub async fn get_analyses_by_status(
        &self,
        status: AnalysisStatus,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        self.store.find_by_status(status, page, size).await
    }

    pub async fn get_recent_analyses(
        &self,
        since: DateTime<Utc>,
    ) -> PrlyzerResult<Vec<PullRequestAnalysis>> {
        self.store.find_recent_since(since).await
    }
}
