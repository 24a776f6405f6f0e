use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::report;
use crate::core::error::{ProbeError, Result};
use crate::core::types::ProbeOutcome;
use crate::reporting::logging;

/// Separator placed between a URL and its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    ColonSpace,
}

impl Delimiter {
    /// Comma for destinations ending in `.csv`, colon-space otherwise.
    ///
    /// The check is case-sensitive on the file name as given.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        let is_csv = path
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(report::CSV_SUFFIX));

        if is_csv {
            Delimiter::Comma
        } else {
            Delimiter::ColonSpace
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => report::CSV_DELIMITER,
            Delimiter::ColonSpace => report::TEXT_DELIMITER,
        }
    }
}

/// One `url<delimiter>status` row per outcome, newline separated.
pub fn render(outcomes: &[ProbeOutcome], delimiter: Delimiter) -> String {
    let delim = delimiter.as_str();
    outcomes
        .iter()
        .map(|outcome| format!("{}{delim}{}", outcome.url, outcome.status))
        .collect::<Vec<_>>()
        .join(report::LINE_SEPARATOR)
}

/// The bare URLs whose probe failed, newline separated.
///
/// Unknown results are not failures and are left out.
pub fn render_errors_only(outcomes: &[ProbeOutcome]) -> String {
    outcomes
        .iter()
        .filter(|outcome| outcome.status.is_error())
        .map(|outcome| outcome.url.as_str())
        .collect::<Vec<_>>()
        .join(report::LINE_SEPARATOR)
}

/// Location of the error-only report: `_errors` goes before the extension.
pub fn errors_path<P: AsRef<Path>>(output: P) -> PathBuf {
    let output = output.as_ref();
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut file_name = format!("{stem}{}", report::ERRORS_SUFFIX);
    if let Some(ext) = output.extension() {
        file_name.push('.');
        file_name.push_str(&ext.to_string_lossy());
    }

    output.with_file_name(file_name)
}

/// Write every outcome, delimited according to the destination name.
pub fn write_main_report(outcomes: &[ProbeOutcome], path: &Path) -> Result<()> {
    write_report(path, &render(outcomes, Delimiter::for_path(path)))?;
    logging::log_report_written(path, outcomes.len());
    Ok(())
}

/// Write the URLs whose probe failed.
pub fn write_error_report(outcomes: &[ProbeOutcome], path: &Path) -> Result<()> {
    write_report(path, &render_errors_only(outcomes))?;
    logging::log_report_written(
        path,
        outcomes.iter().filter(|o| o.status.is_error()).count(),
    );
    Ok(())
}

fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ProbeError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
