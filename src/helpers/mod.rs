pub mod config_helper;
pub mod language;
pub mod prompt_generator;
