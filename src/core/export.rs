//! Export seating arrangements and slot reports
//!
//! The allocator's output is an ordered table; exporters serialize it
//! without reordering, so repeated runs over identical inputs produce
//! byte-identical files.

use crate::core::models::SeatAssignment;
use crate::core::report::SlotReport;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Column order of the exported seating table
const COLUMNS: [&str; 13] = [
    "hall_no",
    "seat_no",
    "reg_no",
    "name",
    "department",
    "academic_year",
    "course_code",
    "course_name",
    "date",
    "slot",
    "start_time",
    "end_time",
    "exam_type",
];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Markdown table
    Markdown,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }

    /// Get the exporter for this format
    #[must_use]
    pub fn exporter(&self) -> Box<dyn SeatingExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Markdown => Box::new(MarkdownExporter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Trait for serializing a seating arrangement
pub trait SeatingExporter {
    /// Render the arrangement as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, assignments: &[SeatAssignment]) -> Result<String, Box<dyn Error>>;

    /// Render the arrangement and write it to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn export(
        &self,
        assignments: &[SeatAssignment],
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let content = self.render(assignments)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// CSV exporter for the seating table
pub struct CsvExporter;

impl SeatingExporter for CsvExporter {
    fn render(&self, assignments: &[SeatAssignment]) -> Result<String, Box<dyn Error>> {
        let mut output = String::new();
        let _ = writeln!(output, "{}", COLUMNS.join(","));

        for a in assignments {
            let row = [
                csv_escape(&a.hall_no),
                a.seat_no.to_string(),
                csv_escape(&a.reg_no),
                csv_escape(&a.name),
                csv_escape(&a.department),
                csv_escape(&a.academic_year),
                csv_escape(&a.course_code),
                csv_escape(&a.course_name),
                csv_escape(&a.date),
                a.slot.to_string(),
                a.start_time.clone(),
                a.end_time.clone(),
                csv_escape(&a.exam_type),
            ];
            let _ = writeln!(output, "{}", row.join(","));
        }
        Ok(output)
    }
}

/// Markdown exporter for the seating table
pub struct MarkdownExporter;

impl SeatingExporter for MarkdownExporter {
    fn render(&self, assignments: &[SeatAssignment]) -> Result<String, Box<dyn Error>> {
        let mut output = String::from("# Seating Arrangement\n\n");
        let _ = writeln!(output, "| {} |", COLUMNS.join(" | "));
        let _ = writeln!(output, "|{}", "---|".repeat(COLUMNS.len()));

        for a in assignments {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                a.hall_no,
                a.seat_no,
                a.reg_no,
                a.name,
                a.department,
                a.academic_year,
                a.course_code,
                a.course_name,
                a.date,
                a.slot,
                a.start_time,
                a.end_time,
                a.exam_type
            );
        }
        Ok(output)
    }
}

/// Render a slot report as a Markdown pivot table
#[must_use]
pub fn render_slot_report(report: &SlotReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "| Slot | {} | Total |", report.departments.join(" | "));
    let _ = writeln!(output, "|{}", "---|".repeat(report.departments.len() + 2));

    for row in &report.rows {
        let counts: Vec<String> = row.counts.iter().map(u32::to_string).collect();
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            row.slot,
            counts.join(" | "),
            row.total
        );
    }
    output
}

/// Quote a CSV field when it contains separators or quotes
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
