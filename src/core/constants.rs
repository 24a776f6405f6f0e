/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Everything the loader, expander and reporter agree on lives here so the
/// pieces cannot drift apart.
/// URL normalization constants
pub mod urls {
    /// Scheme every normalized URL starts with
    pub const HTTPS_SCHEME: &str = "https://";
    /// A normalized URL must contain at least one of these
    pub const REQUIRED_CHAR: char = '.';
    /// Editors on Windows often start UTF-8 files with one
    pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
}

/// Instance expansion constants
pub mod instances {
    /// Marker identifying a URL as one member of a numbered instance family
    pub const TOKEN: &str = "01";
    /// Number of siblings generated per eligible URL (01 through 08)
    pub const VARIANT_COUNT: usize = 8;
}

/// Default file locations
pub mod defaults {
    /// Default input file with one URL per line
    pub const INPUT_PATH: &str = "urls.txt";
    /// Default report destination
    pub const OUTPUT_PATH: &str = "output.csv";
    /// Default configuration file looked up in the working directory
    pub const CONFIG_FILE_NAME: &str = ".urlprobe.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_PARENT_SEARCH_DEPTH: usize = 3;
    /// Maximum redirects followed by the HTTP transport
    pub const MAX_REDIRECTS: usize = 10;
}

/// Report formatting constants
pub mod report {
    /// Extension that switches the report to comma-delimited rows
    pub const CSV_SUFFIX: &str = ".csv";
    /// Delimiter for CSV destinations
    pub const CSV_DELIMITER: &str = ",";
    /// Delimiter for every other destination
    pub const TEXT_DELIMITER: &str = ": ";
    /// Status label for a reachable URL
    pub const STATUS_OK: &str = "OK";
    /// Status label for an unreachable URL
    pub const STATUS_ERROR: &str = "ERROR";
    /// Status label for a URL without a recorded probe
    pub const STATUS_UNKNOWN: &str = "null";
    /// Inserted before the extension of the error-only report
    pub const ERRORS_SUFFIX: &str = "_errors";
    /// Row separator
    pub const LINE_SEPARATOR: &str = "\n";
}
