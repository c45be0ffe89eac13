//! Plain-text summaries returned to the calling agent.

use std::fmt::Write as _;

use herald_core::{ValidationResult, validation::ValidationError};

use crate::tools::CampaignOutcome;

/// Remaining errors listed in a summary before truncating.
const MAX_LISTED_ERRORS: usize = 5;

/// Summary centred on validation before and after enhancement.
#[must_use]
pub fn validation_summary(outcome: &CampaignOutcome) -> String {
    let report = &outcome.report;
    let mut out = String::new();

    let _ = writeln!(out, "HTML validation completed for {}", report.campaign_path);
    if let Some(trace_id) = &report.trace_id {
        let _ = writeln!(out, "Trace: {trace_id}");
    }
    let _ = writeln!(
        out,
        "Initial: {} (score {}/100)",
        describe(&report.initial_validation),
        report.quality_score.initial
    );
    let _ = writeln!(
        out,
        "Final: {} (score {}/100)",
        describe(&report.final_validation),
        report.quality_score.final_score
    );
    write_decision(&mut out, outcome);

    if !report.final_validation.errors.is_empty() {
        out.push_str("Remaining errors:\n");
        for error in report.final_validation.errors.iter().take(MAX_LISTED_ERRORS) {
            let _ = writeln!(out, "  - {}", describe_error(error));
        }
        let hidden = report
            .final_validation
            .errors
            .len()
            .saturating_sub(MAX_LISTED_ERRORS);
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {hidden} more");
        }
    }

    write_files(&mut out, outcome);
    out
}

/// Summary centred on what the enhancement changed.
#[must_use]
pub fn enhancement_summary(outcome: &CampaignOutcome) -> String {
    let report = &outcome.report;
    let size = &outcome.enhancement.size_analysis;
    let mut out = String::new();

    let _ = writeln!(out, "Email design enhancement for {}", report.campaign_path);
    if let Some(trace_id) = &report.trace_id {
        let _ = writeln!(out, "Trace: {trace_id}");
    }
    let _ = writeln!(
        out,
        "Size: {} -> {} bytes ({:+.1}%)",
        size.original_length, size.optimized_length, size.change_percent
    );
    write_decision(&mut out, outcome);
    let _ = writeln!(
        out,
        "Final template: {}",
        describe(&report.final_validation)
    );
    write_files(&mut out, outcome);
    out
}

fn write_decision(out: &mut String, outcome: &CampaignOutcome) {
    let enhancement = &outcome.enhancement;
    if enhancement.protection_triggered() {
        out.push_str("Kept version: original (AI changes rejected)\n");
        out.push_str("Reasons:\n");
    } else {
        out.push_str("Kept version: optimized\n");
        out.push_str("Enhancements:\n");
    }
    for item in &enhancement.enhancements_made {
        let _ = writeln!(out, "  - {item}");
    }
}

fn write_files(out: &mut String, outcome: &CampaignOutcome) {
    out.push_str("Files written:\n");
    for file in &outcome.report.files_written {
        let _ = writeln!(out, "  - {file}");
    }
    let _ = writeln!(out, "Report: {}", outcome.report_path.display());
}

fn describe(result: &ValidationResult) -> String {
    format!(
        "{} ({} errors, {} warnings)",
        if result.is_valid { "valid" } else { "invalid" },
        result.errors.len(),
        result.warnings.len()
    )
}

fn describe_error(error: &ValidationError) -> String {
    match &error.suggestion {
        Some(suggestion) => format!(
            "[{}/{}] {} ({suggestion})",
            error.severity, error.kind, error.message
        ),
        None => format!("[{}/{}] {}", error.severity, error.kind, error.message),
    }
}
