pub mod config;
pub mod analysis_config;
pub mod ai_config;
pub mod source_host_config;
