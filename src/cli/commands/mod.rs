//! Command handlers for the `SeatPlan` CLI

pub mod allocate;
pub mod config;
pub mod report;
pub mod validate;

use seatplan::config::Config;
use seatplan::core::models::Student;
use seatplan::core::roster;
use seatplan::core::rules::SeatingRules;
use seatplan::error;
use std::path::{Path, PathBuf};

/// Load the seating rules named by the config, or the compiled-in
/// defaults when none is configured
pub fn load_rules(config: &Config) -> Result<SeatingRules, String> {
    let path = if config.paths.rules_file.is_empty() {
        None
    } else {
        Some(Path::new(&config.paths.rules_file))
    };
    SeatingRules::load(path)
}

/// Load and concatenate student rosters from several CSV files
pub fn load_all_students(
    student_files: &[PathBuf],
    rules: &SeatingRules,
) -> Result<Vec<Student>, String> {
    let mut students = Vec::new();
    for file in student_files {
        let roster = roster::load_students(file, rules).map_err(|e| {
            error!("Failed to load roster {}: {e}", file.display());
            format!("✗ Failed to load {}: {e}", file.display())
        })?;
        students.extend(roster);
    }
    Ok(students)
}
