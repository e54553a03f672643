//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::checker::ComparisonOutcome;
use crate::cli::args::{OutputFormat, PlagcheckArgs};
use crate::error::Result;

/// Result structure printed for a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub percent: u32,
    pub ratio: f64,
    pub matched_windows: usize,
    pub total_windows: usize,
    pub degenerate_inputs: Vec<String>,
}

impl From<&ComparisonOutcome> for ComparisonResult {
    fn from(outcome: &ComparisonOutcome) -> Self {
        ComparisonResult {
            percent: outcome.report.percent(),
            ratio: outcome.report.ratio,
            matched_windows: outcome.report.matched_windows,
            total_windows: outcome.report.total_windows,
            degenerate_inputs: outcome
                .degenerate_inputs
                .iter()
                .map(|path| path.to_string_lossy().to_string())
                .collect(),
        }
    }
}

/// Print a comparison outcome in the requested format.
pub fn output_result(outcome: &ComparisonOutcome, args: &PlagcheckArgs) -> Result<()> {
    let rendered = render_result(&ComparisonResult::from(outcome), args)?;
    println!("{rendered}");
    Ok(())
}

/// Render a comparison result in the requested format.
pub fn render_result(result: &ComparisonResult, args: &PlagcheckArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(format_percent(result.percent)),
        OutputFormat::Json => render_json(result, args),
        OutputFormat::Csv => Ok(render_csv(result)),
    }
}

/// Format a whole percentage the way the human output prints it.
pub fn format_percent(percent: u32) -> String {
    format!("{percent}%")
}

fn render_json(result: &ComparisonResult, args: &PlagcheckArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn render_csv(result: &ComparisonResult) -> String {
    let mut lines = vec!["key,value".to_string()];
    lines.push(format!("percent,{}", result.percent));
    lines.push(format!("ratio,{}", result.ratio));
    lines.push(format!("matched_windows,{}", result.matched_windows));
    lines.push(format!("total_windows,{}", result.total_windows));
    lines.push(format!(
        "degenerate_inputs,{}",
        format_csv_value(&result.degenerate_inputs.join(";"))
    ));
    lines.join("\n")
}

/// Quote a CSV field when it contains separators or quotes.
fn format_csv_value(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
