//! URL loading and instance expansion
//!
//! This module turns the raw input file into the probe set: loading
//! normalizes lines into URLs, expansion adds the numbered siblings.

pub mod expander;
pub mod loader;

// Re-export commonly used items
pub use expander::{build_probe_set, expand};
pub use loader::{Loader, UrlLoader, load};
