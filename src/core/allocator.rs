//! Greedy hall-packing engine
//!
//! One deterministic pass over in-memory collections, no I/O: slots in
//! session order, exams in schedule order within their slot, and each
//! exam's cohort packed first-fit into halls sorted by descending
//! capacity. Halls are not reserved per exam; a later exam in the same
//! slot keeps filling whatever capacity remains, with seat numbers
//! continuing from the hall's running occupancy.

use crate::core::departments;
use crate::core::models::{Hall, ScheduledExam, SeatAssignment, Slot, Student};
use crate::core::rules::SeatingRules;
use std::collections::HashMap;

/// Allocate seats for one session
///
/// Preconditions: student departments are canonical codes and every
/// schedule row carries its resolved slot (unresolved rows are dropped
/// here, not an error). Data-quality gaps never raise: unknown sessions,
/// empty cohorts, department/slot mismatches and capacity shortfalls all
/// express themselves as absence in the output.
///
/// The output order — slot, then exam, then hall by descending capacity,
/// then student input order — is an observable contract; exports rely on
/// it being reproducible.
#[must_use]
pub fn allocate(
    students: &[Student],
    halls: &[Hall],
    schedule: &[ScheduledExam],
    exam_type: &str,
    session: &str,
    rules: &SeatingRules,
) -> Vec<SeatAssignment> {
    let valid_slots = rules.session_slots(session);

    let scheduled: Vec<&ScheduledExam> = schedule
        .iter()
        .filter(|exam| exam.slot.is_some_and(|slot| valid_slots.contains(&slot)))
        .collect();

    // Department lists are extracted once per exam row, not per hall pass.
    let exam_departments: HashMap<&str, Vec<String>> = scheduled
        .iter()
        .filter(|exam| !exam.department_field.is_empty())
        .map(|exam| {
            (
                exam.course_code.as_str(),
                departments::extract(&exam.department_field, rules),
            )
        })
        .collect();

    // Descending capacity; the stable sort keeps input order on ties,
    // which the determinism contract requires.
    let mut sorted_halls: Vec<&Hall> = halls.iter().collect();
    sorted_halls.sort_by(|a, b| b.capacity.cmp(&a.capacity));

    // Running occupancy per (hall, slot). Seat numbers continue from
    // these counts across exams sharing a slot.
    let mut occupancy: HashMap<(String, Slot), u32> = HashMap::new();
    let mut assignments: Vec<SeatAssignment> = Vec::new();

    for &slot in &valid_slots {
        let slot_departments = rules.departments_for(slot);

        for exam in scheduled.iter().filter(|exam| exam.slot == Some(slot)) {
            let Some(extracted) = exam_departments.get(exam.course_code.as_str()) else {
                continue;
            };

            // Departments outside this slot's set are a schedule
            // inconsistency; they drop out of the intersection silently.
            let eligible: Vec<&str> = extracted
                .iter()
                .map(String::as_str)
                .filter(|code| slot_departments.contains(code))
                .collect();
            if eligible.is_empty() {
                continue;
            }

            let cohort: Vec<&Student> = students
                .iter()
                .filter(|student| eligible.contains(&student.department.as_str()))
                .collect();
            if cohort.is_empty() {
                continue;
            }

            let window = rules.window(slot);
            let mut seated = 0usize;

            for hall in &sorted_halls {
                if seated >= cohort.len() {
                    break;
                }

                let key = (hall.hall_no.clone(), slot);
                let occupied = occupancy.get(&key).copied().unwrap_or(0);
                let free = hall.capacity.saturating_sub(occupied);
                if free == 0 {
                    continue;
                }

                let take = (free as usize).min(cohort.len() - seated);
                for (index, student) in cohort[seated..seated + take].iter().enumerate() {
                    assignments.push(SeatAssignment {
                        hall_no: hall.hall_no.clone(),
                        seat_no: occupied + index as u32 + 1,
                        reg_no: student.reg_no.clone(),
                        name: student.name.clone(),
                        department: student.department.clone(),
                        academic_year: student.academic_year.clone(),
                        course_code: exam.course_code.clone(),
                        course_name: exam.course_name.clone(),
                        date: exam.date.clone(),
                        slot,
                        start_time: window.start.clone(),
                        end_time: window.end.clone(),
                        exam_type: exam_type.to_string(),
                    });
                }

                occupancy.insert(key, occupied + take as u32);
                seated += take;
            }
            // Any remainder of the cohort stays unseated: capacity
            // shortfall is tolerated, not an error.
        }
    }

    assignments
}
