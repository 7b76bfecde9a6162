//! Output Rendering
//!
//! Human-readable summary of a deploy run. With `--json` the NDJSON event
//! stream is the output and nothing is rendered here.

use std::io::{self, Write};

use crate::application::DeployResult;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    push: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            push: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            push: "->",
            skip: "[ ]",
        }
    }
}

/// Text renderer for deploy results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    /// One line per file, then a summary
    pub fn render<W: Write + ?Sized>(&self, result: &DeployResult, out: &mut W) -> io::Result<()> {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        for outcome in &result.outcomes {
            let icon = if outcome.pushed && outcome.unchanged != Some(true) {
                icons.push
            } else {
                icons.skip
            };
            writeln!(
                out,
                "{} {:<9} {} ({})",
                icon,
                outcome.status(),
                outcome.app_id,
                outcome.path.display()
            )?;
        }

        for failure in &result.failures {
            writeln!(
                out,
                "{} {:<9} {}: {}",
                icons.cross,
                "failed",
                failure.path.display(),
                failure.error
            )?;
        }

        for path in &result.skipped {
            writeln!(out, "{} {:<9} {}", icons.skip, "skipped", path.display())?;
        }

        let unchanged = result
            .outcomes
            .iter()
            .filter(|o| o.pushed && o.unchanged == Some(true))
            .count();
        let dry_run = result.outcomes.iter().filter(|o| !o.pushed).count();

        writeln!(out)?;
        write!(
            out,
            "{} {} deployed, {} unchanged, {} dry-run, {} failed",
            if result.is_success() {
                icons.check
            } else {
                icons.cross
            },
            result.pushed_count() - unchanged,
            unchanged,
            dry_run,
            result.failures.len()
        )?;
        if result.aborted {
            write!(out, " (aborted, {} not attempted)", result.skipped.len())?;
        }
        writeln!(out)
    }
}
