//! Console rendering of pipeline outcomes.

use serde::Serialize;

use crate::pipeline::PipelineOutcome;

const RULE_WIDTH: usize = 50;

/// A section header framed by rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

/// Describe an outcome the way the drivers print it.
pub fn render_outcome(outcome: &PipelineOutcome) -> String {
    let mut lines = Vec::new();

    if let Some(call) = outcome.call() {
        lines.push(format!("Function to call: {}", call.name));
        lines.push(format!("Arguments: {}", to_json(&call.arguments)));
    }

    match outcome {
        PipelineOutcome::Notified {
            validation, result, ..
        } => {
            if !validation.missing.is_empty() {
                lines.push(format!("Warning: missing arguments: {}", validation.missing.join(", ")));
            }
            if !validation.mistyped.is_empty() {
                lines.push(format!(
                    "Warning: mistyped arguments: {}",
                    validation.mistyped.join(", ")
                ));
            }
            lines.push(format!("Result: {}", to_json(result)));
        }
        PipelineOutcome::Rejected { validation, .. } => {
            lines.push(format!(
                "Not executed: incomplete call (missing: [{}], mistyped: [{}])",
                validation.missing.join(", "),
                validation.mistyped.join(", ")
            ));
        }
        PipelineOutcome::UnknownTool { call } => {
            lines.push(format!("Not executed: no notifier registered for '{}'", call.name));
        }
        PipelineOutcome::PlainText { text } => {
            lines.push("No function call found in the response.".to_string());
            lines.push("Response content:".to_string());
            lines.push(text.clone());
        }
    }

    lines.join("\n")
}
