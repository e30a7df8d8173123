//! Static HTML export
//!
//! Renders a [`Report`] into a minimal standalone page — embedded CSS, one
//! table, a footer note — and writes it to disk. The exporter consumes exactly
//! the same `Report` the console renderer does; only the framing differs.

use crate::report::builder::Report;
use crate::types::LibraryError;
use std::fs;
use std::path::Path;

/// Escape the characters HTML treats specially in text content
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn table(report: &Report) -> String {
    let head_cells: String = report
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();

    let body_rows: String = report
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!("<table><thead><tr>{head_cells}</tr></thead><tbody>{body_rows}</tbody></table>")
}

/// Full page around the table, title escaped into both `<title>` and `<h1>`
fn page(report: &Report) -> String {
    let title = escape(&report.title);
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <style>
    body {{ font-family: Arial, Helvetica, sans-serif; margin: 20px; }}
    h1 {{ font-size: 20px; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ccc; padding: 8px; text-align: left; }}
    th {{ background: #f0f0f0; }}
    tr:nth-child(even) td {{ background: #fafafa; }}
    .small {{ color: #666; font-size: 12px; margin-top: 8px; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  {table}
  <div class="small">Generado por Biblioteca Digital (consola)</div>
</body>
</html>"#,
        table = table(report),
    )
}

/// Write one report as a standalone HTML page
pub fn export(report: &Report, destination: &Path) -> Result<(), LibraryError> {
    fs::write(destination, page(report))?;
    Ok(())
}

/// Ensure the output directory exists before exporting into it
pub fn ensure_output_dir(dir: &Path) -> Result<(), LibraryError> {
    fs::create_dir_all(dir)?;
    Ok(())
}
