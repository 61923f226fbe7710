pub mod response_normalizer;
pub mod file_analyzer;
pub mod score_aggregator;
pub mod review_service;
pub mod engines;
pub mod source_hosts;
pub mod stores;
