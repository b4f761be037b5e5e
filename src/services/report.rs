use std::fmt::Write;

use crate::config::OutputFormat;
use crate::models::MatchingReport;

/// Render a report as a plain-text listing, one block per request
///
/// The header names the configured top-K even when fewer candidates are eligible.
pub fn render_text(report: &MatchingReport) -> String {
    let mut out = String::new();
    for shortlist in &report.shortlists {
        let _ = writeln!(
            out,
            "Request ID {} Top {} Candidates:",
            shortlist.request_id,
            report.top_k
        );
        for candidate in &shortlist.candidates {
            let _ = writeln!(
                out,
                "  Volunteer ID: {} Matching_percentage: {:.2} %",
                candidate.volunteer_id,
                candidate.score * 100.0
            );
        }
    }
    out
}

/// Render a report in the requested format
pub fn render(report: &MatchingReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
