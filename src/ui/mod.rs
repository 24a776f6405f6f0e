//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, interactive prompts, console messages and
//! progress reporting.

pub mod cli;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::Console;
pub use progress::ProgressReporter;
pub use prompt::PathPrompt;
