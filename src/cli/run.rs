//! Run command implementation.

use super::output::{JsonRunResult, format_text, render_grid};
use super::{CliError, OutputFormat};
use gridhunt::game::invariants;
use gridhunt::scenario::Scenario;
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded or a scripted
/// command is rejected.
pub(crate) fn execute(path: &Path, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let scenario = Scenario::load(path)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;

    let report = scenario.run()?;
    invariants::assert_invariants(&report.engine);

    match format {
        OutputFormat::Text => {
            if !quiet {
                for line in &report.log {
                    println!("{}: {}", line.command, line.message);
                }
                println!();
            }
            print!("{}", render_grid(&report.engine));
            println!();
            print!("{}", format_text(&report.engine));
        }
        OutputFormat::Json => {
            let json_result = JsonRunResult::from_report(&report);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
