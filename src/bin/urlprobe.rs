use clap::Parser;
use urlprobe::config::{CliConfig, Config, RunConfig};
use urlprobe::reporting::logging;
use urlprobe::ui::{Cli, Console, PathPrompt, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_urlprobe_logic(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main logic extracted from main() for testing
///
/// Unreachable URLs are results, not failures: a completed run exits 0
/// whatever the report contains.
pub async fn run_urlprobe_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let mut config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let console = Console::new(cli_config.quiet);
    console.display_banner();

    let run_config = resolve_run_config(&mut config, &cli_config)?;

    let summary = urlprobe::run(&run_config).await.inspect_err(|e| {
        logging::log_error("Run aborted", Some(e));
    })?;

    console.goodbye();
    log::debug!(
        "{} URL(s) probed, {} unreachable",
        summary.probed,
        summary.failures
    );

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Prompt for missing paths when a terminal is attached, then resolve defaults
pub fn resolve_run_config(
    config: &mut Config,
    cli_config: &CliConfig,
) -> Result<RunConfig, Box<dyn std::error::Error>> {
    if PathPrompt::is_available(cli_config.non_interactive) {
        PathPrompt::new().complete(config)?;
    }

    Ok(config.to_run_config(cli_config))
}
