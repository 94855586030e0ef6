use std::fmt::Write;

use crate::error::Result;
use crate::results::{Diagnostic, ResultSet};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub const ERRORS_HEADING: &str = "The following files have errors:";
pub const WARNINGS_HEADING: &str = "The following files have warnings:";
pub const CLEAN_HEADING: &str = "The following files have no errors or warnings:";
pub const IGNORED_HEADING: &str =
    "The following files have unrecognized formats and therefore were not processed:";

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_section(&self, output: &mut String, heading: &str, color: &str, lines: &[String]) {
        if lines.is_empty() {
            return;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(output, "{}", self.colorize(heading, color));
        for line in lines {
            let _ = writeln!(output, "{line}");
        }
    }
}

fn render(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let mut output = String::new();

        self.write_section(&mut output, ERRORS_HEADING, ansi::RED, &render(results.errors()));
        self.write_section(
            &mut output,
            WARNINGS_HEADING,
            ansi::YELLOW,
            &render(results.warnings()),
        );
        self.write_section(&mut output, CLEAN_HEADING, ansi::GREEN, &render(results.clean()));

        let ignored: Vec<String> = results
            .ignored()
            .iter()
            .map(|p| format!("{}{}", crate::results::DIAGNOSTIC_PREFIX, p.display()))
            .collect();
        self.write_section(&mut output, IGNORED_HEADING, ansi::CYAN, &ignored);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
