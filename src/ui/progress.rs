use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const PROBE_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs probed ({eta}) {msg}";

/// Progress bar shown while the probe set is in flight.
pub struct ProgressReporter {
    probe_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            probe_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_probing(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template(PROBE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_urls as u64);
        pb.set_style(style);
        pb.set_message("Probing URLs");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.probe_progress = Some(pb);
    }

    pub fn update_probe_progress(&self, current: usize) {
        if let Some(ref pb) = self.probe_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_probing(&self, reachable: usize, total: usize) {
        if let Some(ref pb) = self.probe_progress {
            let message = if reachable == total {
                "✓ All URLs reachable".to_string()
            } else {
                format!("✓ Probing complete ({reachable}/{total} reachable)")
            };
            pb.finish_with_message(message);
        }
    }
}
