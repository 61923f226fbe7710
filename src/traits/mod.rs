pub mod analysis_engine;
pub mod source_host;
pub mod analysis_store;
