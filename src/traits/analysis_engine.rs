use async_trait::async_trait;
use crate::errors::PrlyzerResult;

/// The LLM analysis engine boundary. The returned text is untrusted: it is
/// expected to contain a JSON report but nothing guarantees it does, so
/// callers must run it through the response normalizer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    async fn analyze(&self, prompt: &str) -> PrlyzerResult<String>;
}
