use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use async_trait::async_trait;
use prlyzer_cli::enums::analysis_status::AnalysisStatus;
use prlyzer_cli::enums::change_kind::ChangeKind;
use prlyzer_cli::errors::{PrlyzerError, PrlyzerResult};
use prlyzer_cli::services::file_analyzer::FileAnalyzer;
use prlyzer_cli::services::review_service::ReviewService;
use prlyzer_cli::services::stores::memory::InMemoryAnalysisStore;
use prlyzer_cli::structs::analysis_request::AnalysisRequest;
use prlyzer_cli::structs::config::analysis_config::AnalysisConfig;
use prlyzer_cli::structs::pull_request_analysis::PullRequestAnalysis;
use prlyzer_cli::structs::pull_request_file::PullRequestFile;
use prlyzer_cli::structs::pull_request_metadata::PullRequestMetadata;
use prlyzer_cli::traits::analysis_engine::AnalysisEngine;
use prlyzer_cli::traits::analysis_store::AnalysisStore;
use prlyzer_cli::traits::source_host::SourceHost;

/// Engine stub scripted per file path. The prompt embeds the path, so
/// responses are matched by substring; every call is counted.
struct ScriptedEngine {
    responses: Vec<(String, String)>,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    fn new(responses: Vec<(&str, String)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(path, body)| (path.to_string(), body))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisEngine for ScriptedEngine {
    async fn analyze(&self, prompt: &str) -> PrlyzerResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .iter()
            .find(|(path, _)| prompt.contains(path.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| PrlyzerError::engine_error("chat completion", Some(500), "unscripted prompt"))
    }
}

struct FakeSourceHost {
    files: Vec<PullRequestFile>,
    fail_metadata: bool,
}

#[async_trait]
impl SourceHost for FakeSourceHost {
    async fn get_pull_request_metadata(
        &self,
        _owner: &str,
        _repository: &str,
        _pr_number: u32,
    ) -> PrlyzerResult<PullRequestMetadata> {
        if self.fail_metadata {
            return Err(PrlyzerError::source_host_error(
                "pull request metadata",
                Some(502),
                "bad gateway",
            ));
        }
        Ok(PullRequestMetadata {
            title: "Add widget parser".to_string(),
            description: Some("Parses widgets".to_string()),
            author: "octocat".to_string(),
            state: "open".to_string(),
            head_ref: "feature/widgets".to_string(),
            head_sha: "abc123".to_string(),
        })
    }

    async fn get_changed_files(
        &self,
        _owner: &str,
        _repository: &str,
        _pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        Ok(self.files.clone())
    }

    async fn get_code_files_for_analysis(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        self.get_changed_files(owner, repository, pr_number).await
    }
}

/// Source host that cancels the stored analysis record mid-pass,
/// simulating an external `cancel_analysis` racing the in-flight pass.
/// With `fail_after_cancel` the cancel lands during the metadata fetch
/// and the fetch itself then fails; otherwise the cancel lands during
/// the file listing and the pass proceeds normally.
struct CancellingSourceHost {
    store: Arc<InMemoryAnalysisStore>,
    fail_after_cancel: bool,
}

impl CancellingSourceHost {
    async fn cancel_record(&self, owner: &str, repository: &str, pr_number: u32) -> PrlyzerResult<()> {
        if let Some(mut record) = self
            .store
            .find_by_owner_repo_and_pr_number(owner, repository, pr_number)
            .await?
        {
            record.set_status(AnalysisStatus::Cancelled)?;
            self.store.save_analysis(&record).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SourceHost for CancellingSourceHost {
    async fn get_pull_request_metadata(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<PullRequestMetadata> {
        if self.fail_after_cancel {
            self.cancel_record(owner, repository, pr_number).await?;
            return Err(PrlyzerError::source_host_error(
                "pull request metadata",
                Some(502),
                "bad gateway",
            ));
        }
        Ok(PullRequestMetadata {
            title: "Add widget parser".to_string(),
            description: None,
            author: "octocat".to_string(),
            state: "open".to_string(),
            head_ref: "feature/widgets".to_string(),
            head_sha: "abc123".to_string(),
        })
    }

    async fn get_changed_files(
        &self,
        _owner: &str,
        _repository: &str,
        _pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        Ok(Vec::new())
    }

    async fn get_code_files_for_analysis(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        self.cancel_record(owner, repository, pr_number).await?;
        Ok(Vec::new())
    }
}

fn rust_file(path: &str, content: &str) -> PullRequestFile {
    let file_name = path.rsplit('/').next().unwrap().to_string();
    PullRequestFile {
        file_path: path.to_string(),
        file_name,
        change_kind: ChangeKind::Modified,
        before_content: Some("// old".to_string()),
        after_content: Some(content.to_string()),
    }
}

fn engine_json(summary: &str) -> String {
    format!(
        r#"{{"summary": "{}", "securityScore": 80, "performanceScore": 70, "bestPracticesScore": 90, "issues": [], "suggestions": []}}"#,
        summary
    )
}

fn test_config() -> AnalysisConfig {
    AnalysisConfig {
        supported_extensions: ".rs".to_string(),
        max_file_size: 10_000,
    }
}

fn build_service(
    engine: Arc<ScriptedEngine>,
    source_host: Arc<dyn SourceHost>,
    store: Arc<InMemoryAnalysisStore>,
    config: AnalysisConfig,
) -> ReviewService {
    let file_analyzer = Arc::new(FileAnalyzer::new(engine, config.clone()));
    ReviewService::new(store, source_host, file_analyzer, config)
}

#[tokio::test]
async fn completed_analysis_is_not_reanalyzed() {
    let engine = Arc::new(ScriptedEngine::new(vec![
        ("src/a.rs", engine_json("file a")),
        ("src/b.rs", engine_json("file b")),
    ]));
    let source_host = Arc::new(FakeSourceHost {
        files: vec![rust_file("src/a.rs", "fn a() {}"), rust_file("src/b.rs", "fn b() {}")],
        fail_metadata: false,
    });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(Arc::clone(&engine), source_host, Arc::clone(&store), test_config());

    let first = service.start_analysis("octocat", "widgets", 7).wait().await.unwrap();
    assert_eq!(first.status, AnalysisStatus::Completed);
    assert_eq!(first.branch_name.as_deref(), Some("feature/widgets"));
    assert_eq!(engine.call_count(), 2);
    assert_eq!(store.find_results_for_analysis(first.id).await.unwrap().len(), 2);

    let second = service.start_analysis("octocat", "widgets", 7).wait().await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.status, AnalysisStatus::Completed);
    // no re-analysis, no duplicated per-file results
    assert_eq!(engine.call_count(), 2);
    assert_eq!(store.find_results_for_analysis(first.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn one_malformed_file_does_not_abort_the_pass() {
    let engine = Arc::new(ScriptedEngine::new(vec![
        ("src/a.rs", engine_json("file a")),
        ("src/b.rs", "total garbage, not json".to_string()),
        ("src/c.rs", engine_json("file c")),
    ]));
    let source_host = Arc::new(FakeSourceHost {
        files: vec![
            rust_file("src/a.rs", "fn a() {}"),
            rust_file("src/b.rs", "fn b() {}"),
            rust_file("src/c.rs", "fn c() {}"),
        ],
        fail_metadata: false,
    });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(engine, source_host, Arc::clone(&store), test_config());

    let analysis = service.start_analysis("octocat", "widgets", 8).wait().await.unwrap();
    assert_eq!(analysis.status, AnalysisStatus::Completed);

    let results = store.find_results_for_analysis(analysis.id).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.file_path != "src/b.rs"));
    assert!(results.iter().all(|r| r.analysis_id == Some(analysis.id)));
}

#[tokio::test]
async fn metadata_failure_fails_the_analysis() {
    let engine = Arc::new(ScriptedEngine::new(vec![]));
    let source_host = Arc::new(FakeSourceHost { files: vec![], fail_metadata: true });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(Arc::clone(&engine), source_host, Arc::clone(&store), test_config());

    let error = service.start_analysis("octocat", "widgets", 9).wait().await.unwrap_err();
    assert!(matches!(error, PrlyzerError::SourceHostUnavailable { .. }));
    assert_eq!(engine.call_count(), 0);

    let stored = store
        .find_by_owner_repo_and_pr_number("octocat", "widgets", 9)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, AnalysisStatus::Failed);
    assert!(stored.error_message.is_some());
}

#[tokio::test]
async fn oversized_file_is_skipped_not_fatal() {
    let engine = Arc::new(ScriptedEngine::new(vec![("src/small.rs", engine_json("small"))]));
    let big_content = "x".repeat(200);
    let source_host = Arc::new(FakeSourceHost {
        files: vec![
            rust_file("src/small.rs", "fn s() {}"),
            rust_file("src/big.rs", &big_content),
        ],
        fail_metadata: false,
    });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let config = AnalysisConfig {
        supported_extensions: ".rs".to_string(),
        max_file_size: 100,
    };
    let service = build_service(Arc::clone(&engine), source_host, Arc::clone(&store), config);

    let analysis = service.start_analysis("octocat", "widgets", 10).wait().await.unwrap();
    assert_eq!(analysis.status, AnalysisStatus::Completed);
    assert_eq!(engine.call_count(), 1);

    let results = store.find_results_for_analysis(analysis.id).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_path, "src/small.rs");
}

#[tokio::test]
async fn summary_aggregates_stored_results() {
    let engine = Arc::new(ScriptedEngine::new(vec![
        ("src/a.rs", engine_json("file a")),
        (
            "src/b.rs",
            // missing bestPracticesScore: overall collapses to the zero sentinel
            r#"{"summary": "file b", "securityScore": 60, "performanceScore": 40}"#.to_string(),
        ),
    ]));
    let source_host = Arc::new(FakeSourceHost {
        files: vec![rust_file("src/a.rs", "fn a() {}"), rust_file("src/b.rs", "fn b() {}")],
        fail_metadata: false,
    });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(engine, source_host, store, test_config());

    let analysis = service.start_analysis("octocat", "widgets", 11).wait().await.unwrap();
    let summary = service.get_summary(analysis.id).await.unwrap();

    assert_eq!(summary.total_files, 2);
    // security: (80 + 60) / 2; best practices: 90 present in one file of two
    assert!((summary.average_security_score - 70.0).abs() < f64::EPSILON);
    assert!((summary.average_best_practices_score - 45.0).abs() < f64::EPSILON);
    // overall: (80.0 mean + 0.0 sentinel) / 2
    assert!((summary.average_overall_score - 40.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn summary_for_unknown_analysis_is_not_found() {
    let engine = Arc::new(ScriptedEngine::new(vec![]));
    let source_host = Arc::new(FakeSourceHost { files: vec![], fail_metadata: false });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(engine, source_host, store, test_config());

    let error = service.get_summary(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, PrlyzerError::NotFound { .. }));
}

#[tokio::test]
async fn pre_set_cancel_flag_schedules_no_file_analyses() {
    let engine = Arc::new(ScriptedEngine::new(vec![
        ("src/a.rs", engine_json("file a")),
        ("src/b.rs", engine_json("file b")),
    ]));
    let source_host = Arc::new(FakeSourceHost {
        files: vec![rust_file("src/a.rs", "fn a() {}"), rust_file("src/b.rs", "fn b() {}")],
        fail_metadata: false,
    });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(Arc::clone(&engine), source_host, Arc::clone(&store), test_config());

    // the flag is advisory and checked before each file is scheduled
    let flag = Arc::new(AtomicBool::new(true));
    let analysis = service
        .clone()
        .run_analysis(AnalysisRequest::new("octocat", "widgets", 13), flag)
        .await
        .unwrap();

    assert_eq!(analysis.status, AnalysisStatus::Completed);
    assert_eq!(engine.call_count(), 0);
    assert!(store.find_results_for_analysis(analysis.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn externally_cancelled_record_is_returned_untouched() {
    let engine = Arc::new(ScriptedEngine::new(vec![]));
    let store = Arc::new(InMemoryAnalysisStore::new());
    let source_host = Arc::new(CancellingSourceHost {
        store: Arc::clone(&store),
        fail_after_cancel: false,
    });
    let service = build_service(engine, source_host, Arc::clone(&store), test_config());

    let analysis = service.start_analysis("octocat", "widgets", 14).wait().await.unwrap();
    assert_eq!(analysis.status, AnalysisStatus::Cancelled);
    assert!(analysis.updated_at.is_none());

    let stored = store.find_by_id(analysis.id).await.unwrap().unwrap();
    assert_eq!(stored.status, AnalysisStatus::Cancelled);
    assert!(stored.error_message.is_none());
}

#[tokio::test]
async fn failure_does_not_overwrite_a_cancelled_record() {
    let engine = Arc::new(ScriptedEngine::new(vec![]));
    let store = Arc::new(InMemoryAnalysisStore::new());
    let source_host = Arc::new(CancellingSourceHost {
        store: Arc::clone(&store),
        fail_after_cancel: true,
    });
    let service = build_service(engine, source_host, Arc::clone(&store), test_config());

    let error = service.start_analysis("octocat", "widgets", 15).wait().await.unwrap_err();
    assert!(matches!(error, PrlyzerError::SourceHostUnavailable { .. }));

    // CANCELLED is terminal: the failure path must not flip it to FAILED
    let stored = store
        .find_by_owner_repo_and_pr_number("octocat", "widgets", 15)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, AnalysisStatus::Cancelled);
    assert!(stored.error_message.is_none());
}

#[tokio::test]
async fn cancel_parks_a_pending_analysis() {
    let engine = Arc::new(ScriptedEngine::new(vec![]));
    let source_host = Arc::new(FakeSourceHost { files: vec![], fail_metadata: false });
    let store = Arc::new(InMemoryAnalysisStore::new());
    let service = build_service(engine, source_host, Arc::clone(&store), test_config());

    let pending = PullRequestAnalysis::new("octocat", "widgets", 12);
    store.save_analysis(&pending).await.unwrap();

    let cancelled = service.cancel_analysis(pending.id).await.unwrap();
    assert_eq!(cancelled.status, AnalysisStatus::Cancelled);

    // terminal records cannot be cancelled again
    let error = service.cancel_analysis(pending.id).await.unwrap_err();
    assert!(matches!(error, PrlyzerError::InvalidTransition { .. }));
}
