pub mod analysis_report_logger;
