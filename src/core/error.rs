use std::fmt;
use std::path::PathBuf;

/// Error types for urlprobe operations
#[derive(Debug)]
pub enum ProbeError {
    /// The URL list could not be read
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A report file could not be written
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// Interactive prompt error
    Prompt(dialoguer::Error),

    /// Any other IO error
    Io(std::io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InputUnreadable { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            ProbeError::OutputUnwritable { path, source } => {
                write!(f, "Could not write '{}': {source}", path.display())
            }
            ProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            ProbeError::Prompt(err) => write!(f, "Prompt error: {err}"),
            ProbeError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::InputUnreadable { source, .. } => Some(source),
            ProbeError::OutputUnwritable { source, .. } => Some(source),
            ProbeError::TomlParsing(err) => Some(err),
            ProbeError::Http(err) => Some(err),
            ProbeError::Prompt(err) => Some(err),
            ProbeError::Io(err) => Some(err),
            ProbeError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Io(err)
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Http(err)
    }
}

impl From<toml::de::Error> for ProbeError {
    fn from(err: toml::de::Error) -> Self {
        ProbeError::TomlParsing(err)
    }
}

impl From<dialoguer::Error> for ProbeError {
    fn from(err: dialoguer::Error) -> Self {
        ProbeError::Prompt(err)
    }
}

/// Type alias for Results using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;
