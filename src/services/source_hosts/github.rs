use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::try_join_all;
use reqwest::Client;
use serde::Deserialize;
use crate::enums::change_kind::ChangeKind;
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::helpers::language;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::pull_request_file::PullRequestFile;
use crate::structs::pull_request_metadata::PullRequestMetadata;
use crate::traits::source_host::SourceHost;

const GITHUB_API_VERSION: &str = "2022-11-28";

#[derive(Deserialize)]
struct RawPullRequest {
    title: String,
    body: Option<String>,
    state: String,
    user: RawUser,
    head: RawRef,
    base: RawRef,
}

#[derive(Deserialize)]
struct RawUser {
    login: String,
}

#[derive(Deserialize)]
struct RawRef {
    #[serde(rename = "ref")]
    git_ref: String,
    sha: String,
}

#[derive(Deserialize)]
struct RawChangedFile {
    filename: String,
    status: String,
}

/// GitHub REST gateway. Built explicitly with its client, API URL and
/// token; no hidden first-call initialization. Content is requested with
/// the raw media type so no base64 decoding is involved.
pub struct GithubSourceHost {
    client: Client,
    api_url: String,
    token: String,
    analysis_config: AnalysisConfig,
    // (owner, repository, pr) -> (head ref, base ref), filled by the
    // metadata fetch so listing the files does not refetch the pull request
    refs_cache: DashMap<(String, String, u32), (String, String)>,
}

impl GithubSourceHost {
    pub fn new(api_url: String, token: String, analysis_config: AnalysisConfig) -> Self {
        Self {
            client: Client::new(),
            api_url,
            token,
            analysis_config,
            refs_cache: DashMap::new(),
        }
    }

    fn remember_refs(&self, owner: &str, repository: &str, pr_number: u32, head: &str, base: &str) {
        self.refs_cache.insert(
            (owner.to_string(), repository.to_string(), pr_number),
            (head.to_string(), base.to_string()),
        );
    }

    fn cached_refs(&self, owner: &str, repository: &str, pr_number: u32) -> Option<(String, String)> {
        self.refs_cache
            .get(&(owner.to_string(), repository.to_string(), pr_number))
            .map(|entry| entry.value().clone())
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        operation: &str,
        url: &str,
    ) -> PrlyzerResult<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", "prlyzer")
            .send()
            .await
            .map_err(|e| PrlyzerError::source_host_error(operation, None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PrlyzerError::source_host_error(
                operation,
                Some(status.as_u16()),
                "request rejected by source host",
            ));
        }

        response
            .json()
            .await
            .map_err(|e| PrlyzerError::source_host_error(operation, None, &e.to_string()))
    }

    /// Fetches one file's content at a ref. A missing file (e.g. looking
    /// up a deleted path on the head ref) comes back as None.
    async fn get_file_content(
        &self,
        owner: &str,
        repository: &str,
        file_path: &str,
        git_ref: &str,
    ) -> PrlyzerResult<Option<String>> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_url, owner, repository, file_path, git_ref
        );
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github.raw+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", "prlyzer")
            .send()
            .await
            .map_err(|e| PrlyzerError::source_host_error("file content", None, &e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PrlyzerError::source_host_error(
                "file content",
                Some(status.as_u16()),
                file_path,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PrlyzerError::source_host_error("file content", None, &e.to_string()))?;
        Ok(Some(body))
    }

    async fn load_file(
        &self,
        owner: &str,
        repository: &str,
        raw: RawChangedFile,
        head_ref: &str,
        base_ref: &str,
    ) -> PrlyzerResult<PullRequestFile> {
        let change_kind = ChangeKind::from_host_status(&raw.status).unwrap_or(ChangeKind::Modified);

        let before_content = match change_kind {
            ChangeKind::Modified | ChangeKind::Deleted => {
                self.get_file_content(owner, repository, &raw.filename, base_ref).await?
            }
            ChangeKind::Added => None,
        };
        let after_content = match change_kind {
            ChangeKind::Added | ChangeKind::Modified => {
                self.get_file_content(owner, repository, &raw.filename, head_ref).await?
            }
            ChangeKind::Deleted => None,
        };

        Ok(PullRequestFile {
            file_name: language::file_name_from_path(&raw.filename).to_string(),
            file_path: raw.filename,
            change_kind,
            before_content,
            after_content,
        })
    }
}

#[async_trait]
impl SourceHost for GithubSourceHost {
    async fn get_pull_request_metadata(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<PullRequestMetadata> {
        let url = format!("{}/repos/{}/{}/pulls/{}", self.api_url, owner, repository, pr_number);
        let raw: RawPullRequest = self.get_json("pull request metadata", &url).await?;
        self.remember_refs(owner, repository, pr_number, &raw.head.git_ref, &raw.base.git_ref);
        Ok(PullRequestMetadata {
            title: raw.title,
            description: raw.body,
            author: raw.user.login,
            state: raw.state,
            head_ref: raw.head.git_ref,
            head_sha: raw.head.sha,
        })
    }

    async fn get_changed_files(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        let pr_url = format!("{}/repos/{}/{}/pulls/{}", self.api_url, owner, repository, pr_number);
        let (head_ref, base_ref) = match self.cached_refs(owner, repository, pr_number) {
            Some(refs) => refs,
            None => {
                let raw_pr: RawPullRequest = self.get_json("pull request metadata", &pr_url).await?;
                self.remember_refs(owner, repository, pr_number, &raw_pr.head.git_ref, &raw_pr.base.git_ref);
                (raw_pr.head.git_ref, raw_pr.base.git_ref)
            }
        };

        let files_url = format!("{}/files", pr_url);
        let raw_files: Vec<RawChangedFile> = self.get_json("changed files", &files_url).await?;

        let fetches = raw_files
            .into_iter()
            .map(|raw| self.load_file(owner, repository, raw, &head_ref, &base_ref));
        try_join_all(fetches).await
    }

    async fn get_code_files_for_analysis(
        &self,
        owner: &str,
        repository: &str,
        pr_number: u32,
    ) -> PrlyzerResult<Vec<PullRequestFile>> {
        let files = self.get_changed_files(owner, repository, pr_number).await?;
        Ok(files
            .into_iter()
            .filter(|file| self.analysis_config.supports_file(&file.file_name))
            .collect())
    }
}
