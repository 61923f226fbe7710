pub mod analysis_request;
pub mod pull_request_analysis;
pub mod code_file_result;
pub mod issue;
pub mod suggestion;
pub mod analysis_summary;
pub mod pull_request_metadata;
pub mod pull_request_file;
pub mod engine_report;
pub mod cli;
pub mod config;
