pub mod analysis_status;
pub mod change_kind;
pub mod issue_category;
pub mod issue_severity;
pub mod suggestion_type;
pub mod effort_level;
pub mod commands;
