//! Validate command handler

use crate::commands::{load_all_students, load_rules};
use seatplan::config::Config;
use seatplan::core::report;
use seatplan::error;
use std::path::PathBuf;

/// Run the validate command: list students whose department maps to no
/// exam slot.
pub fn run(student_files: &[PathBuf], config: &Config) {
    if let Err(err) = check(student_files, config) {
        error!("Validation failed: {err}");
        eprintln!("{err}");
    }
}

fn check(student_files: &[PathBuf], config: &Config) -> Result<(), String> {
    let rules = load_rules(config)?;
    let students = load_all_students(student_files, &rules)?;

    let invalid = report::validate_students(&students, &rules);
    if invalid.is_empty() {
        println!("✓ All {} students map to an exam slot", students.len());
        return Ok(());
    }

    eprintln!("✗ {} of {} students have no slot assignment:", invalid.len(), students.len());
    for entry in &invalid {
        let name = if entry.name.is_empty() { "-" } else { entry.name.as_str() };
        eprintln!(
            "  {} | {} | {} | {}",
            entry.reg_no, name, entry.department, entry.reason
        );
    }
    Ok(())
}
