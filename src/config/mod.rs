//! Configuration management
//!
//! This module handles loading configuration from a TOML file, merging it
//! with CLI arguments, and resolving the final settings of a run.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::defaults;
use crate::core::error::{ProbeError, Result};
use crate::validation::HttpProbeOptions;

/// Settings read from `.urlprobe.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// File with one URL per line
    pub input: Option<String>,

    /// Report destination; `.csv` selects comma-delimited rows
    pub output: Option<String>,

    /// Maximum probes in flight (unbounded when unset)
    pub concurrency: Option<usize>,

    /// Use HEAD requests instead of GET
    pub use_head_requests: Option<bool>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProbeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ProbeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look for a config file in the working directory and a few parents
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for a config file in `dir` and up to three of its parents,
    /// falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut current = dir.to_path_buf();
        for _ in 0..=defaults::CONFIG_PARENT_SEARCH_DEPTH {
            if let Ok(config) = Self::load_from_file(current.join(defaults::CONFIG_FILE_NAME)) {
                return config;
            }
            current.push("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref input) = cli_config.input {
            self.input = Some(input.clone());
        }
        if let Some(ref output) = cli_config.output {
            self.output = Some(output.clone());
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if cli_config.use_head_requests {
            self.use_head_requests = Some(true);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == Some(0) {
            return Err(ProbeError::Config(
                "Concurrency cannot be 0. Expected a positive integer, or leave it unset for no limit."
                    .to_string(),
            ));
        }

        for (name, value) in [("input", &self.input), ("output", &self.output)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ProbeError::Config(format!(
                    "The {name} path cannot be empty."
                )));
            }
        }

        Ok(())
    }

    /// Resolve the settings of a run, using defaults for missing paths
    pub fn to_run_config(&self, cli_config: &CliConfig) -> RunConfig {
        RunConfig {
            input: PathBuf::from(self.input.as_deref().unwrap_or(defaults::INPUT_PATH)),
            output: PathBuf::from(self.output.as_deref().unwrap_or(defaults::OUTPUT_PATH)),
            concurrency: self.concurrency,
            use_head_requests: self.use_head_requests.unwrap_or(false),
            user_agent: self.user_agent.clone(),
            quiet: cli_config.quiet,
            show_progress: !cli_config.quiet && !cli_config.no_progress,
        }
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub input: Option<String>,       // --input
    pub output: Option<String>,      // --output
    pub concurrency: Option<usize>,  // --concurrency
    pub use_head_requests: bool,     // --head
    pub user_agent: Option<String>,  // --user-agent
    pub quiet: bool,                 // --quiet
    pub verbose: bool,               // --verbose
    pub no_progress: bool,           // --no-progress
    pub non_interactive: bool,       // --non-interactive
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Maximum probes in flight; `None` puts the whole probe set in flight
    pub concurrency: Option<usize>,
    pub use_head_requests: bool,
    pub user_agent: Option<String>,
    /// Suppress console messages
    pub quiet: bool,
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(defaults::INPUT_PATH),
            output: PathBuf::from(defaults::OUTPUT_PATH),
            concurrency: None,
            use_head_requests: false,
            user_agent: None,
            quiet: false,
            show_progress: false,
        }
    }
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input: P, output: Q) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn http_options(&self) -> HttpProbeOptions {
        HttpProbeOptions {
            use_head_requests: self.use_head_requests,
            user_agent: self.user_agent.clone(),
        }
    }
}
