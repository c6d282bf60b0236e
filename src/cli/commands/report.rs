//! Slot report command handler

use crate::commands::{load_all_students, load_rules};
use seatplan::config::Config;
use seatplan::core::export::render_slot_report;
use seatplan::core::{report, roster};
use seatplan::{error, info};
use std::path::{Path, PathBuf};

/// Run the slot-report command.
///
/// Prints the slot × department pivot (or writes it to `output_file`),
/// and in verbose mode adds department-wise statistics.
pub fn run(
    student_files: &[PathBuf],
    schedule_file: Option<&Path>,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = generate(student_files, schedule_file, output_file, config, verbose) {
        error!("Slot report failed: {err}");
        eprintln!("{err}");
    }
}

fn generate(
    student_files: &[PathBuf],
    schedule_file: Option<&Path>,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let rules = load_rules(config)?;
    let students = load_all_students(student_files, &rules)?;

    let slot_report = report::slot_report(&students, &rules);
    let rendered = render_slot_report(&slot_report);

    if let Some(path) = output_file {
        std::fs::write(path, &rendered)
            .map_err(|e| format!("✗ Failed to write report to {}: {e}", path.display()))?;
        println!("✓ Slot report written to: {}", path.display());
        info!("Slot report written to: {}", path.display());
    } else {
        println!("\n=== Students per slot and department ===\n");
        print!("{rendered}");
    }

    if verbose {
        let schedule = match schedule_file {
            Some(path) => roster::load_schedule(path, &rules)
                .map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))?,
            None => Vec::new(),
        };
        print_department_stats(&report::department_stats(&students, &schedule, &rules));
    }
    Ok(())
}

fn print_department_stats(stats: &seatplan::core::report::DepartmentStats) {
    println!("\n=== Department totals ===");
    for total in &stats.dept_totals {
        let slot = total
            .slot
            .map_or_else(|| "unassigned".to_string(), |s| format!("slot {s}"));
        println!("{}: {} students ({slot})", total.department, total.total);
    }

    println!("\n=== Year totals ===");
    for total in &stats.year_totals {
        println!("Year {}: {} students", total.academic_year, total.total);
    }

    if !stats.exam_counts.is_empty() {
        println!("\n=== Scheduled exams per department ===");
        for (department, count) in &stats.exam_counts {
            println!("{department}: {count} exam(s)");
        }
    }
}
