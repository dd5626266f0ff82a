use std::io::Write;

use llf_common::{LlfError, OutputFormat};
use llf_domain::{ScanReport, SizeFormat};

/// Writes `report` to `out` in the requested layout.
pub fn render(
    report: &ScanReport,
    output: OutputFormat,
    size_format: SizeFormat,
    out: &mut impl Write,
) -> Result<(), LlfError> {
    match output {
        OutputFormat::Line => render_lines(report, size_format, out),
        OutputFormat::Table => render_table(report, size_format, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).map_err(std::io::Error::from)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_lines(
    report: &ScanReport,
    size_format: SizeFormat,
    out: &mut impl Write,
) -> Result<(), LlfError> {
    // An empty tree still yields one line: empty path, zero size.
    if report.largest.is_empty() {
        writeln!(out, " {}", size_format.render(0))?;
        return Ok(());
    }
    for entry in &report.largest {
        writeln!(out, "{} {}", entry.path, size_format.render(entry.size))?;
    }
    Ok(())
}

fn render_table(
    report: &ScanReport,
    size_format: SizeFormat,
    out: &mut impl Write,
) -> Result<(), LlfError> {
    let header = ["Name".to_string(), "Size".to_string(), "Full path".to_string()];
    let rows: Vec<[String; 3]> = report
        .largest
        .iter()
        .map(|e| [e.name().to_string(), size_format.render(e.size), e.path.clone()])
        .collect();

    let mut widths = header.each_ref().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+";

    writeln!(out, "{rule}")?;
    write_row(out, &header, &widths)?;
    writeln!(out, "{rule}")?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    if !rows.is_empty() {
        writeln!(out, "{rule}")?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String; 3], widths: &[usize; 3]) -> Result<(), LlfError> {
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        write!(out, "| {}{} ", cell, " ".repeat(pad))?;
    }
    writeln!(out, "|")?;
    Ok(())
}
