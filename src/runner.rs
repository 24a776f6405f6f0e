//! Drives one run: load, expand, probe, report.

use crate::config::RunConfig;
use crate::core::constants::instances;
use crate::core::error::Result;
use crate::core::types::{ProbeOutcome, ReportPaths, RunSummary};
use crate::discovery::{Loader, UrlLoader, build_probe_set};
use crate::reporting::{errors_path, logging, write_error_report, write_main_report};
use crate::ui::output::Console;
use crate::ui::progress::ProgressReporter;
use crate::validation::{HttpProbe, Probe, Prober};

/// Run the pipeline against the real network.
pub async fn run(config: &RunConfig) -> Result<RunSummary> {
    let probe = HttpProbe::new(&config.http_options())?;
    run_with_probe(config, probe).await
}

/// Run the pipeline with the given transport.
///
/// Probing only starts once the input is fully loaded, and reports are
/// only written once every probe has finished. An unreadable input aborts
/// before anything is written.
pub async fn run_with_probe<P: Probe>(config: &RunConfig, probe: P) -> Result<RunSummary> {
    let console = Console::new(config.quiet);
    logging::log_config_info(config);
    console.display_paths(&config.input, &config.output);

    console.loading(&config.input);
    let urls = Loader::default().load_file(&config.input)?;
    logging::log_load_info(&config.input, urls.len());
    console.done();

    let probe_set = build_probe_set(&urls);
    let eligible = urls
        .iter()
        .filter(|url| url.contains(instances::TOKEN))
        .count();
    let generated = probe_set.len() - urls.len();
    logging::log_expansion(eligible, generated);

    console.testing(probe_set.len());
    let mut progress = config.show_progress.then(|| ProgressReporter::new(true));
    let statuses = Prober::new(probe)
        .with_concurrency(config.concurrency)
        .probe_all(&probe_set, progress.as_mut())
        .await;
    console.done();

    let outcomes = ProbeOutcome::zip(&probe_set, &statuses);
    let failures = outcomes.iter().filter(|o| o.status.is_error()).count();

    console.saving(&config.output);
    write_main_report(&outcomes, &config.output)?;
    console.done();

    let errors = errors_path(&config.output);
    console.saving_errors(&errors);
    write_error_report(&outcomes, &errors)?;
    console.done();

    Ok(RunSummary {
        loaded: urls.len(),
        generated,
        probed: probe_set.len(),
        failures,
        paths: ReportPaths {
            report: config.output.clone(),
            errors,
        },
    })
}
