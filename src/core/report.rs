//! Slot reports, department statistics and roster validation
//!
//! Read-only aggregations over the student roster and the schedule.
//! Nothing here mutates or allocates seats; students whose department
//! maps to no slot fall out of the report counts and surface only
//! through [`validate_students`].

use crate::core::departments;
use crate::core::models::{ScheduledExam, Slot, Student};
use crate::core::rules::SeatingRules;
use std::collections::{BTreeMap, BTreeSet};

/// One row of the slot report: counts per department plus a total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReportRow {
    /// The slot this row describes
    pub slot: Slot,
    /// Counts parallel to [`SlotReport::departments`]
    pub counts: Vec<u32>,
    /// Row-wise sum of the counts
    pub total: u32,
}

/// Student counts pivoted by slot and department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    /// Department column labels, sorted
    pub departments: Vec<String>,
    /// One row per slot that has at least one student, in slot order
    pub rows: Vec<SlotReportRow>,
}

/// Build the slot report for a roster
///
/// Students whose department resolves to no slot are excluded from every
/// column; the report does not synthesize an "unassigned" row. Use
/// [`validate_students`] to see who was left out.
#[must_use]
pub fn slot_report(students: &[Student], rules: &SeatingRules) -> SlotReport {
    let mut counts: BTreeMap<(Slot, String), u32> = BTreeMap::new();
    let mut columns: BTreeSet<String> = BTreeSet::new();

    for student in students {
        let Some(slot) = rules.slot_for(&student.department) else {
            continue;
        };
        *counts.entry((slot, student.department.clone())).or_insert(0) += 1;
        columns.insert(student.department.clone());
    }

    let departments: Vec<String> = columns.into_iter().collect();
    let mut rows = Vec::new();

    for slot in Slot::ALL {
        let row_counts: Vec<u32> = departments
            .iter()
            .map(|dept| counts.get(&(slot, dept.clone())).copied().unwrap_or(0))
            .collect();
        let total: u32 = row_counts.iter().sum();
        if total == 0 {
            continue;
        }
        rows.push(SlotReportRow {
            slot,
            counts: row_counts,
            total,
        });
    }

    SlotReport { departments, rows }
}

/// A student whose department maps to no slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignedStudent {
    /// Registration number
    pub reg_no: String,
    /// Student name (may be empty)
    pub name: String,
    /// The department that failed to resolve
    pub department: String,
    /// Human-readable reason
    pub reason: String,
}

/// Find every student whose department slot-resolves to nothing
///
/// Pure read-only scan; returns an empty list when all departments
/// resolve. Allocation silently excludes these students, so this is the
/// one place they become visible.
#[must_use]
pub fn validate_students(students: &[Student], rules: &SeatingRules) -> Vec<UnassignedStudent> {
    students
        .iter()
        .filter(|student| rules.slot_for(&student.department).is_none())
        .map(|student| UnassignedStudent {
            reg_no: student.reg_no.clone(),
            name: student.name.clone(),
            department: student.department.clone(),
            reason: "Department not assigned to any slot".to_string(),
        })
        .collect()
}

/// Count of students per department and academic year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeptYearCount {
    /// Canonical department code
    pub department: String,
    /// Academic year label
    pub academic_year: String,
    /// Number of students
    pub count: u32,
}

/// Per-department student total with its resolved slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeptTotal {
    /// Canonical department code
    pub department: String,
    /// Number of students
    pub total: u32,
    /// Resolved slot, `None` when the department is unmapped
    pub slot: Option<Slot>,
}

/// Per-year student total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTotal {
    /// Academic year label
    pub academic_year: String,
    /// Number of students
    pub total: u32,
}

/// Department-wise statistics over a roster and a schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentStats {
    /// Counts per department and year, sorted
    pub dept_year_counts: Vec<DeptYearCount>,
    /// Per-department totals (all departments, mapped or not)
    pub dept_totals: Vec<DeptTotal>,
    /// Per-year totals
    pub year_totals: Vec<YearTotal>,
    /// Number of scheduled exams naming each department
    pub exam_counts: BTreeMap<String, u32>,
}

/// Aggregate department-wise statistics for reporting
#[must_use]
pub fn department_stats(
    students: &[Student],
    schedule: &[ScheduledExam],
    rules: &SeatingRules,
) -> DepartmentStats {
    let mut by_dept_year: BTreeMap<(String, String), u32> = BTreeMap::new();
    let mut by_dept: BTreeMap<String, u32> = BTreeMap::new();
    let mut by_year: BTreeMap<String, u32> = BTreeMap::new();

    for student in students {
        *by_dept_year
            .entry((student.department.clone(), student.academic_year.clone()))
            .or_insert(0) += 1;
        *by_dept.entry(student.department.clone()).or_insert(0) += 1;
        *by_year.entry(student.academic_year.clone()).or_insert(0) += 1;
    }

    let mut exam_counts: BTreeMap<String, u32> = BTreeMap::new();
    for exam in schedule {
        if exam.department_field.is_empty() {
            continue;
        }
        for code in departments::extract(&exam.department_field, rules) {
            *exam_counts.entry(code).or_insert(0) += 1;
        }
    }

    DepartmentStats {
        dept_year_counts: by_dept_year
            .into_iter()
            .map(|((department, academic_year), count)| DeptYearCount {
                department,
                academic_year,
                count,
            })
            .collect(),
        dept_totals: by_dept
            .into_iter()
            .map(|(department, total)| DeptTotal {
                slot: rules.slot_for(&department),
                department,
                total,
            })
            .collect(),
        year_totals: by_year
            .into_iter()
            .map(|(academic_year, total)| YearTotal {
                academic_year,
                total,
            })
            .collect(),
        exam_counts,
    }
}
