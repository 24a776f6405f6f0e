// Command-line interface definitions and parsing for urlprobe

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Files
    /// File with one URL per line (prompted for when omitted)
    #[arg(short = 'i', long, value_name = "FILE", help_heading = "Files")]
    pub input: Option<String>,

    /// Report file; a .csv name gives comma-delimited rows (prompted for when omitted)
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Files")]
    pub output: Option<String>,

    /// Never prompt; fall back to urls.txt and output.csv
    #[arg(short = 'y', long, help_heading = "Files")]
    pub non_interactive: bool,

    // Probing
    /// Maximum probes in flight (default: all at once)
    #[arg(long, value_name = "COUNT", value_parser = parse_concurrency, help_heading = "Probing")]
    pub concurrency: Option<usize>,

    /// Use HEAD requests instead of GET
    #[arg(long, help_heading = "Probing")]
    pub head: bool,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Probing")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Suppress console messages
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a valid number"))?;
    if count == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    Ok(count)
}

/// Convert the parsed CLI into the options merged over the config file
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: cli.input.clone(),
        output: cli.output.clone(),
        concurrency: cli.concurrency,
        use_head_requests: cli.head,
        user_agent: cli.user_agent.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        non_interactive: cli.non_interactive,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
