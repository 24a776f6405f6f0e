//! Interactive prompts for the input and output paths

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::IsTerminal;

use crate::config::Config;
use crate::core::constants::defaults;
use crate::core::error::Result;

/// Asks for whichever paths the flags and config file left unset.
pub struct PathPrompt {
    theme: ColorfulTheme,
}

impl Default for PathPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PathPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompts only make sense with a terminal on stdin
    pub fn is_available(non_interactive: bool) -> bool {
        !non_interactive && std::io::stdin().is_terminal()
    }

    /// Fill in missing paths; an empty answer keeps the default.
    pub fn complete(&self, config: &mut Config) -> Result<()> {
        if config.input.is_none() {
            config.input = Some(self.ask("Enter input urls file path", defaults::INPUT_PATH)?);
        }
        if config.output.is_none() {
            config.output = Some(self.ask(
                "Enter output results file path",
                defaults::OUTPUT_PATH,
            )?);
        }
        Ok(())
    }

    fn ask(&self, prompt: &str, default: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(resolve_answer(&answer, default))
    }
}

/// Blank answers fall back to the default.
pub fn resolve_answer(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}
