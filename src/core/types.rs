use std::fmt;
use std::path::PathBuf;

use crate::core::constants::report;

/// Result of probing a single URL.
///
/// `Unknown` marks a slot for which no probe was recorded. It should not
/// show up after a completed run but the reporter must still render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeStatus {
    /// The request completed, whatever the HTTP status code
    Ok,
    /// The request failed at the transport level
    Error,
    /// No probe was recorded
    #[default]
    Unknown,
}

impl ProbeStatus {
    /// Report label for this status.
    pub fn label(self) -> &'static str {
        match self {
            ProbeStatus::Ok => report::STATUS_OK,
            ProbeStatus::Error => report::STATUS_ERROR,
            ProbeStatus::Unknown => report::STATUS_UNKNOWN,
        }
    }

    pub fn is_error(self) -> bool {
        self == ProbeStatus::Error
    }
}

impl From<bool> for ProbeStatus {
    fn from(reachable: bool) -> Self {
        if reachable {
            ProbeStatus::Ok
        } else {
            ProbeStatus::Error
        }
    }
}

impl From<Option<bool>> for ProbeStatus {
    fn from(reachable: Option<bool>) -> Self {
        reachable.map_or(ProbeStatus::Unknown, ProbeStatus::from)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A probed URL paired with its status, in probe set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub url: String,
    pub status: ProbeStatus,
}

impl ProbeOutcome {
    pub fn new<S: Into<String>>(url: S, status: ProbeStatus) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    /// Pair URLs with their results by position.
    ///
    /// A missing result (shorter `statuses`) becomes `Unknown` rather than
    /// silently dropping the URL.
    pub fn zip(urls: &[String], statuses: &[ProbeStatus]) -> Vec<Self> {
        urls.iter()
            .enumerate()
            .map(|(i, url)| {
                let status = statuses.get(i).copied().unwrap_or_default();
                Self::new(url.clone(), status)
            })
            .collect()
    }
}

/// Locations of the files written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub errors: PathBuf,
}

/// Counts and file locations produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs surviving normalization
    pub loaded: usize,
    /// Sibling URLs generated by instance expansion
    pub generated: usize,
    /// Size of the probe set
    pub probed: usize,
    /// Probes that ended in a transport failure
    pub failures: usize,
    pub paths: ReportPaths,
}
