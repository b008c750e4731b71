//! CSV export
//!
//! One column per signal group and one row per line of the longest group.
//! Shorter groups are padded with empty cells.

use crate::output::sections::report_sections;
use crate::report::AnalysisReport;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the report as CSV to any writer
pub fn write_csv<W: Write>(report: &AnalysisReport, writer: W) -> Result<()> {
    let sections = report_sections(report);
    let rows = sections.iter().map(|s| s.lines.len()).max().unwrap_or(0);

    let mut writer = ::csv::Writer::from_writer(writer);
    writer.write_record(sections.iter().map(|s| s.column))?;

    for row in 0..rows {
        writer.write_record(
            sections
                .iter()
                .map(|s| s.lines.get(row).map(String::as_str).unwrap_or("")),
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Exports the report as a CSV file
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `output_path` - Path where the CSV file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(LensError)` - Failed to create or write the file
pub fn export_csv(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv(report, file)?;

    tracing::info!("CSV report written to {}", output_path.display());
    Ok(())
}
