//! Allocate command handler

use crate::commands::{load_all_students, load_rules};
use seatplan::config::Config;
use seatplan::core::models::SeatAssignment;
use seatplan::core::export::ExportFormat;
use seatplan::core::{allocator, roster};
use seatplan::{error, info, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Run the allocate command.
///
/// # Arguments
/// * `student_files` - Paths to roster CSV files, concatenated in order
/// * `halls_file` - Hall capacity CSV
/// * `schedule_file` - Exam schedule CSV
/// * `session` - Session name (e.g., FN)
/// * `exam_type` - Label stamped into every output row
/// * `output_file` - Optional output path; defaults to config `out_dir`
/// * `format` - Export format name
/// * `config` - Loaded configuration
/// * `verbose` - Whether to print per-hall occupancy
#[allow(clippy::too_many_arguments)]
pub fn run(
    student_files: &[PathBuf],
    halls_file: &Path,
    schedule_file: &Path,
    session: &str,
    exam_type: &str,
    output_file: Option<&Path>,
    format: &str,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = allocate_and_export(
        student_files,
        halls_file,
        schedule_file,
        session,
        exam_type,
        output_file,
        format,
        config,
        verbose,
    ) {
        error!("Allocation failed for session {session}: {err}");
        eprintln!("{err}");
    }
}

#[allow(clippy::too_many_arguments)]
fn allocate_and_export(
    student_files: &[PathBuf],
    halls_file: &Path,
    schedule_file: &Path,
    session: &str,
    exam_type: &str,
    output_file: Option<&Path>,
    format: &str,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e: String| format!("✗ {e} (expected csv or markdown)"))?;

    let rules = load_rules(config)?;

    if rules.session_slots(session).is_empty() {
        warn!("Session '{session}' has no slots in the rules tables; output will be empty");
    }

    let students = load_all_students(student_files, &rules)?;
    info!("Loaded {} students from {} roster file(s)", students.len(), student_files.len());

    let halls = roster::load_halls(halls_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", halls_file.display()))?;
    let schedule = roster::load_schedule(schedule_file, &rules)
        .map_err(|e| format!("✗ Failed to load {}: {e}", schedule_file.display()))?;

    let unresolved = schedule.iter().filter(|exam| exam.slot.is_none()).count();
    if unresolved > 0 {
        warn!("{unresolved} schedule row(s) have no resolvable slot and will be skipped");
    }

    let assignments = allocator::allocate(&students, &halls, &schedule, exam_type, session, &rules);

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let out_dir = PathBuf::from(&config.paths.out_dir);
        std::fs::create_dir_all(&out_dir).map_err(|e| {
            format!("✗ Failed to create output directory {}: {e}", out_dir.display())
        })?;
        let filename = format!(
            "seating_{}.{}",
            session.to_lowercase(),
            format.extension()
        );
        out_dir.join(filename)
    };

    format
        .exporter()
        .export(&assignments, &final_output_path)
        .map_err(|e| format!("✗ Failed to export to {}: {e}", final_output_path.display()))?;

    println!(
        "✓ Seated {} students; arrangement exported to: {}",
        assignments.len(),
        final_output_path.display()
    );
    info!("Exported seating arrangement to: {}", final_output_path.display());

    if verbose {
        print_occupancy_summary(&assignments);
    }
    Ok(())
}

/// Print seated counts per (slot, hall)
fn print_occupancy_summary(assignments: &[SeatAssignment]) {
    let mut occupancy: BTreeMap<(String, String), usize> = BTreeMap::new();
    for assignment in assignments {
        *occupancy
            .entry((assignment.slot.to_string(), assignment.hall_no.clone()))
            .or_insert(0) += 1;
    }

    println!("\n=== Occupancy by slot and hall ===");
    for ((slot, hall_no), seated) in occupancy {
        println!("Slot {slot} | {hall_no}: {seated} seated");
    }
}
