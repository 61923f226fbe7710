use crate::constants::prompts::{ANALYSIS_FORMAT_PROMPT, ANALYSIS_ROLE_PROMPT};

/// Builds the per-file analysis prompt: role, file metadata, fenced code,
/// then the required response schema.
pub fn build_analysis_prompt(file_path: &str, file_name: &str, language: &str, code: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(ANALYSIS_ROLE_PROMPT);
    prompt.push_str("\n\n");
    prompt.push_str("File Information:\n");
    prompt.push_str(&format!("- Path: {}\n", file_path));
    prompt.push_str(&format!("- Language: {}\n", language));
    prompt.push_str(&format!("- Name: {}\n\n", file_name));
    prompt.push_str("Code to analyze:\n");
    prompt.push_str(&format!("```{}\n{}\n```\n\n", language, code));
    prompt.push_str(ANALYSIS_FORMAT_PROMPT);
    prompt
}
