//! Fixed-width console rendering
//!
//! Renders a [`Report`] as a titled, dash-underlined table with per-column
//! widths. Cells longer than their column are truncated; the row data itself
//! is never altered, so what the HTML exporter writes stays identical.

use crate::report::builder::Report;

/// Truncate to `width` characters (not bytes), then left-pad to `width`
fn cell(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn line(fields: &[String], widths: &[usize]) -> String {
    fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| cell(field, width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a report to a string, one trailing newline included
pub fn render(report: &Report, widths: &[usize]) -> String {
    let rule_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    let mut out = String::new();
    out.push_str(&report.title.to_uppercase());
    out.push('\n');
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    out.push_str(&line(&report.headers, widths));
    out.push('\n');
    for row in &report.rows {
        out.push_str(&line(row, widths));
        out.push('\n');
    }
    out
}
