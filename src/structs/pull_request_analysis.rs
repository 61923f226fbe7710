use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::{PrlyzerError, PrlyzerResult};

/// The repository-level analysis record for one (owner, repository,
/// pull request number) triple. Status changes go through `set_status`,
/// which is the only place allowed to touch `status` and `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestAnalysis {
    pub id: Uuid,
    pub owner: String,
    pub repository: String,
    pub pull_request_number: u32,
    pub status: AnalysisStatus,
    pub branch_name: Option<String>,
    pub title: Option<String>,
    pub commit_sha: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PullRequestAnalysis {
    pub fn new(owner: &str, repository: &str, pull_request_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            repository: repository.to_string(),
            pull_request_number,
            status: AnalysisStatus::Pending,
            branch_name: None,
            title: None,
            commit_sha: None,
            error_message: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Advances the lifecycle. Rejects anything `can_transition_to` does
    /// not allow; stamps `updated_at` exactly when the record becomes
    /// COMPLETED or FAILED, and at no other time.
    pub fn set_status(&mut self, next: AnalysisStatus) -> PrlyzerResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(PrlyzerError::invalid_transition(
                self.status.name(),
                next.name(),
            ));
        }
        self.status = next;
        if matches!(next, AnalysisStatus::Completed | AnalysisStatus::Failed) {
            self.updated_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_analysis_starts_pending() {
        let analysis = PullRequestAnalysis::new("octocat", "hello-world", 7);
        assert_eq!(analysis.status, AnalysisStatus::Pending);
        assert!(analysis.updated_at.is_none());
        assert!(analysis.error_message.is_none());
    }

    #[test]
    fn updated_at_stamped_only_on_completion_or_failure() {
        let mut analysis = PullRequestAnalysis::new("octocat", "hello-world", 7);
        analysis.set_status(AnalysisStatus::InProgress).unwrap();
        assert!(analysis.updated_at.is_none());
        analysis.set_status(AnalysisStatus::Completed).unwrap();
        assert!(analysis.updated_at.is_some());
    }

    #[test]
    fn cancellation_is_not_stamped() {
        let mut analysis = PullRequestAnalysis::new("octocat", "hello-world", 7);
        analysis.set_status(AnalysisStatus::Cancelled).unwrap();
        assert!(analysis.updated_at.is_none());
    }

    #[test]
    fn transition_out_of_terminal_is_rejected() {
        let mut analysis = PullRequestAnalysis::new("octocat", "hello-world", 7);
        analysis.set_status(AnalysisStatus::InProgress).unwrap();
        analysis.set_status(AnalysisStatus::Failed).unwrap();
        let err = analysis.set_status(AnalysisStatus::InProgress).unwrap_err();
        assert!(matches!(err, PrlyzerError::InvalidTransition { .. }));
        assert_eq!(analysis.status, AnalysisStatus::Failed);
    }
}
