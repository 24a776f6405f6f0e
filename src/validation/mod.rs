//! URL probing
//!
//! This module sends one request per URL of the probe set and records
//! whether each one was reachable.

pub mod prober;

// Re-export commonly used items
pub use prober::{HttpProbe, HttpProbeOptions, Probe, Prober};
