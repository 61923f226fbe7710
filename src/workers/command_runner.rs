use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::commands::Commands;
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::services::engines::openai::OpenAiEngine;
use crate::services::file_analyzer::FileAnalyzer;
use crate::services::review_service::ReviewService;
use crate::services::source_hosts::github::GithubSourceHost;
use crate::services::stores::memory::InMemoryAnalysisStore;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> PrlyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::AnalyzePr { owner, repo, pr_number } => {
                self.analyze_pr_command(owner, repo, pr_number).await
            }
            Commands::AnalyzeFile { path, language } => {
                self.analyze_file_command(path, language).await
            }
            Commands::Summary { analysis_id } => self.summary_command(analysis_id).await,
            Commands::List { owner, repo, status, page, size } => {
                self.list_command(owner, repo, status, page, size).await
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> PrlyzerResult<()> {
        log::info!("🚀 Initializing prlyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Edit it and export your engine key and source host token.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn analyze_pr_command(&self, owner: String, repo: String, pr_number: u32) -> PrlyzerResult<()> {
        let config = ConfigManager::load()?;
        let service = Self::build_review_service(&config)?;

        let handle = service.start_analysis(&owner, &repo, pr_number);
        let analysis = handle.wait().await?;

        log::info!(
            "📋 Analysis {} finished with status {}",
            analysis.id, analysis.status
        );
        if let Some(message) = &analysis.error_message {
            log::error!("❌ {}", message);
        }

        for result in service.get_file_results(analysis.id).await? {
            AnalysisReportLogger::print_file_report(&result);
        }
        let summary = service.get_summary(analysis.id).await?;
        AnalysisReportLogger::print_summary(&summary);

        Ok(())
    }

    async fn analyze_file_command(&self, path: String, language: Option<String>) -> PrlyzerResult<()> {
        let config = ConfigManager::load()?;
        let service = Self::build_review_service(&config)?;

        let code = tokio::fs::read_to_string(&path).await?;
        let result = service
            .analyze_single_file(&path, language.as_deref(), &code)
            .await?;
        AnalysisReportLogger::print_file_report(&result);

        Ok(())
    }

    async fn summary_command(&self, analysis_id: String) -> PrlyzerResult<()> {
        let config = ConfigManager::load()?;
        let service = Self::build_review_service(&config)?;

        let id = Uuid::parse_str(&analysis_id)
            .map_err(|_| PrlyzerError::not_found("Analysis", &analysis_id))?;
        let summary = service.get_summary(id).await?;
        AnalysisReportLogger::print_summary(&summary);

        Ok(())
    }

    async fn list_command(
        &self,
        owner: Option<String>,
        repo: Option<String>,
        status: Option<String>,
        page: usize,
        size: usize,
    ) -> PrlyzerResult<()> {
        let config = ConfigManager::load()?;
        let service = Self::build_review_service(&config)?;

        let analyses = match (owner, repo, status) {
            (_, _, Some(status)) => {
                let status = AnalysisStatus::from_str(&status)
                    .map_err(|message| PrlyzerError::config_error(&message, Some("status")))?;
                service.get_analyses_by_status(status, page, size).await?
            }
            (Some(owner), Some(repo), None) => {
                service.get_repository_analyses(&owner, &repo, page, size).await?
            }
            _ => {
                return Err(PrlyzerError::config_error(
                    "Provide --owner and --repo, or --status",
                    None,
                ));
            }
        };

        if analyses.is_empty() {
            log::info!("⚠️ No analyses found.");
            return Ok(());
        }

        log::info!("📋 Analyses (page {}, size {}):", page, size);
        for (i, analysis) in analyses.iter().enumerate() {
            log::info!(
                "{}. {} {}/{}#{} [{}]",
                i + 1,
                analysis.id,
                analysis.owner,
                analysis.repository,
                analysis.pull_request_number,
                analysis.status,
            );
        }

        Ok(())
    }

    fn build_review_service(config: &Config) -> PrlyzerResult<ReviewService> {
        let api_key = std::env::var(&config.ai.api_key_env).map_err(|_| {
            PrlyzerError::config_error(
                &format!("Engine API key not set in ${}", config.ai.api_key_env),
                Some("ai.api_key_env"),
            )
        })?;
        let token = std::env::var(&config.source_host.token_env).map_err(|_| {
            PrlyzerError::config_error(
                &format!("Source host token not set in ${}", config.source_host.token_env),
                Some("source_host.token_env"),
            )
        })?;

        let engine = Arc::new(OpenAiEngine::new(api_key, &config.ai));
        let source_host = Arc::new(GithubSourceHost::new(
            config.source_host.api_url.clone(),
            token,
            config.analysis.clone(),
        ));
        let store = Arc::new(InMemoryAnalysisStore::new());
        let file_analyzer = Arc::new(FileAnalyzer::new(engine, config.analysis.clone()));

        Ok(ReviewService::new(
            store,
            source_host,
            file_analyzer,
            config.analysis.clone(),
        ))
    }
}
