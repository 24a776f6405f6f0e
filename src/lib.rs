//! urlprobe - probe a list of URLs and their numbered instance siblings
//!
//! The pipeline runs strictly forward: the loader normalizes raw lines
//! into URLs, the expander adds the `01`..`08` siblings of every URL that
//! carries the instance token, the prober checks every URL concurrently and
//! the reporter writes a delimited report plus an error-only companion.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod runner;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use config::{CliConfig, Config, RunConfig};
pub use core::{ProbeError, ProbeOutcome, ProbeStatus, Result, RunSummary};
pub use discovery::{build_probe_set, expand, load};
pub use reporting::{Delimiter, render, render_errors_only};
pub use runner::{run, run_with_probe};
pub use validation::{HttpProbe, Probe, Prober};
