use crate::config::RunConfig;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Console messages cover the normal run
    };

    // RUST_LOG still wins when set
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved run configuration
pub fn log_config_info(config: &RunConfig) {
    let concurrency = config
        .concurrency
        .map_or_else(|| "unbounded".to_string(), |n| n.to_string());

    info!(
        "Configuration: input={}, output={}",
        config.input.display(),
        config.output.display()
    );
    info!(
        "Probing: concurrency={concurrency}, head_requests={}",
        config.use_head_requests
    );
}

/// Log how many URLs survived normalization
pub fn log_load_info(path: &Path, loaded: usize) {
    info!("Loaded {loaded} URL(s) from {}", path.display());
}

/// Log instance expansion results
pub fn log_expansion(eligible: usize, generated: usize) {
    if eligible > 0 {
        info!("Expanded {eligible} instance URL(s) into {generated} sibling(s)");
    } else {
        debug!("No instance URLs to expand");
    }
}

/// Log probe start
pub fn log_probe_start(url_count: usize, limit: usize) {
    info!("Probing {url_count} URL(s) with up to {limit} in flight");
}

/// Log probe completion
pub fn log_probe_complete(url_count: usize, failures: usize, duration_ms: u128) {
    if failures == 0 {
        info!("✅ Probing complete: {url_count}/{url_count} reachable ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Probing complete: {}/{} reachable, {} unreachable ({}ms)",
            url_count - failures,
            url_count,
            failures,
            duration_ms
        );
    }
}

/// Log individual probe results for debugging
pub fn log_url_result(url: &str, reachable: bool, description: Option<&str>) {
    match (reachable, description) {
        (true, _) => debug!("✓ {url}"),
        (false, Some(desc)) => debug!("✗ {url} -> {desc}"),
        (false, None) => debug!("✗ {url}"),
    }
}

/// Log report writes
pub fn log_report_written(path: &Path, rows: usize) {
    info!("Wrote {rows} row(s) to {}", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
