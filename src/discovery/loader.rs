use crate::core::constants::urls;
use crate::core::error::{ProbeError, Result};

use std::fs;
use std::path::Path;

pub trait UrlLoader {
    fn load_file(&self, path: &Path) -> Result<Vec<String>>;
}

#[derive(Default, Debug)]
pub struct Loader {}

impl UrlLoader for Loader {
    fn load_file(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|source| ProbeError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(load(&String::from_utf8_lossy(&bytes)))
    }
}

/// Turn raw text into normalized URLs, one candidate per line.
///
/// Order and duplicates are preserved. Lines that are blank or that do not
/// contain a `.` once normalized are dropped. A leading byte order mark is
/// not part of the first line.
pub fn load(raw_text: &str) -> Vec<String> {
    raw_text
        .strip_prefix(urls::BYTE_ORDER_MARK)
        .unwrap_or(raw_text)
        .split('\n')
        .filter_map(normalize_line)
        .collect()
}

/// Normalize a single line, returning `None` when it should be discarded.
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url = if trimmed.starts_with(urls::HTTPS_SCHEME) {
        trimmed.to_string()
    } else {
        format!("{}{trimmed}", urls::HTTPS_SCHEME)
    };

    url.contains(urls::REQUIRED_CHAR).then_some(url)
}
