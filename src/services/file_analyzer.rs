use std::sync::Arc;
use crate::enums::change_kind::ChangeKind;
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::helpers::{language, prompt_generator};
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::code_file_result::CodeFileResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::traits::analysis_engine::AnalysisEngine;

/// Wraps one engine call plus normalization behind a single-file contract.
/// Gating (extension allow-list, size limit) happens before the engine is
/// ever invoked; retry policy belongs to the caller, not here.
pub struct FileAnalyzer {
    engine: Arc<dyn AnalysisEngine>,
    normalizer: ResponseNormalizer,
    config: AnalysisConfig,
}

impl FileAnalyzer {
    pub fn new(engine: Arc<dyn AnalysisEngine>, config: AnalysisConfig) -> Self {
        Self {
            engine,
            normalizer: ResponseNormalizer::new(),
            config,
        }
    }

    pub async fn analyze_code(
        &self,
        file_path: &str,
        file_name: &str,
        change_kind: ChangeKind,
        language: &str,
        code: &str,
    ) -> PrlyzerResult<CodeFileResult> {
        if !self.config.supports_file(file_name) {
            return Err(PrlyzerError::unsupported_file(
                file_path,
                language::extension_of(file_name),
            ));
        }
        if code.len() > self.config.max_file_size {
            return Err(PrlyzerError::file_too_large(
                file_path,
                code.len(),
                self.config.max_file_size,
            ));
        }

        let prompt = prompt_generator::build_analysis_prompt(file_path, file_name, language, code);
        log::debug!("Requesting analysis for {} ({} bytes)", file_path, code.len());

        let raw = self.engine.analyze(&prompt).await?;
        let report = self.normalizer.normalize(&raw)?;

        Ok(CodeFileResult::from_report(
            file_path, file_name, change_kind, language, code, report,
        ))
    }
}
