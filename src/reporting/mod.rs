//! Report rendering and logging
//!
//! This module turns probe outcomes into the delimited report files and
//! holds the structured logging helpers used across the pipeline.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::{
    Delimiter, errors_path, render, render_errors_only, write_error_report, write_main_report,
};
