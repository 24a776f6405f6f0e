//! Console messages printed while a run progresses

use std::path::Path;

pub const BANNER: &str = "DNS Testing Tool";

/// Prints the stage messages of a run, or nothing when quiet.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn say(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    pub fn display_banner(&self) {
        self.say(format!("{BANNER}\n"));
    }

    pub fn display_paths(&self, input: &Path, output: &Path) {
        self.say("");
        self.say(format!("Input:  {}", absolute_display(input)));
        self.say(format!("Output: {}", absolute_display(output)));
        self.say("");
    }

    pub fn loading(&self, input: &Path) {
        self.say(format!("Loading {}...", input.display()));
    }

    pub fn testing(&self, url_count: usize) {
        self.say(format!("Testing {url_count} urls..."));
    }

    pub fn saving(&self, output: &Path) {
        self.say(format!("Saving results to {}...", output.display()));
    }

    pub fn saving_errors(&self, errors: &Path) {
        let name = errors
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| errors.display().to_string());
        self.say(format!("Saving error-only results to {name}..."));
    }

    pub fn done(&self) {
        self.say("Done.\n");
    }

    pub fn goodbye(&self) {
        self.say("Goodbye!");
    }
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
