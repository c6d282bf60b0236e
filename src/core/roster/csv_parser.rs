//! CSV parsers for roster, hall and schedule files
//!
//! Upload files reach the core as plain CSV. Headers are normalized
//! (trim, lowercase, spaces to underscores) and common variations are
//! renamed onto the canonical keys, so "Reg No", "rollno" and
//! "Register Number" all land on `reg_no`. A missing required column is
//! a hard error before any allocation happens; bad cell values inside an
//! otherwise well-shaped file are tolerated the way the rest of the core
//! tolerates data-quality gaps.

use crate::core::departments;
use crate::core::models::{Hall, ScheduledExam, Slot, Student};
use crate::core::rules::SeatingRules;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a CSV line into trimmed fields
///
/// Double-quoted fields may contain commas; department fields like
/// "II YEAR(AGRI,EEE,ECE,MECH)" depend on it.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Normalize a header cell and map known variations onto canonical keys
fn canonical_header(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase().replace(' ', "_");
    let renamed = match normalized.as_str() {
        "reg_no" | "register_number" | "rollno" | "roll_no" | "roll_number" => "reg_no",
        "dept" => "department",
        "sem" => "semester",
        "year" => "academic_year",
        other => other,
    };
    renamed.to_string()
}

/// Get a field value by canonical header name
fn field<'a>(fields: &'a [String], headers: &[String], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
}

/// Split content into a parsed header row and the remaining data lines
fn header_and_rows(content: &str) -> Result<(Vec<String>, Vec<&str>), Box<dyn Error>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or("File is empty")?;
    let headers: Vec<String> = parse_csv_line(header_line)
        .iter()
        .map(|h| canonical_header(h))
        .collect();
    Ok((headers, lines.collect()))
}

fn require_columns(headers: &[String], required: &[&str], what: &str) -> Result<(), Box<dyn Error>> {
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(format!("{what} must have columns: {}", required.join(", ")).into());
        }
    }
    Ok(())
}

/// Parse a student roster from CSV content
///
/// Departments are normalized to canonical codes on the way in; the name
/// column is optional and defaults to empty.
///
/// # Errors
/// Returns an error if a required column (`reg_no`, `department`,
/// `semester`, `section`, `academic_year`) is missing.
pub fn parse_students(content: &str, rules: &SeatingRules) -> Result<Vec<Student>, Box<dyn Error>> {
    let (headers, rows) = header_and_rows(content)?;
    require_columns(
        &headers,
        &["reg_no", "department", "semester", "section", "academic_year"],
        "Student roster",
    )?;

    let mut students = Vec::new();
    for row in rows {
        let fields = parse_csv_line(row);
        let get = |name: &str| field(&fields, &headers, name).unwrap_or("").to_string();

        let mut student = Student::new(
            get("reg_no"),
            departments::normalize(&get("department"), rules),
            get("academic_year"),
        );
        student.name = get("name");
        student.section = get("section");
        student.semester = get("semester");
        students.push(student);
    }
    Ok(students)
}

/// Parse hall definitions from CSV content
///
/// # Errors
/// Returns an error if `hall_no` or `capacity` columns are missing, or a
/// capacity cell is not a positive integer.
pub fn parse_halls(content: &str) -> Result<Vec<Hall>, Box<dyn Error>> {
    let (headers, rows) = header_and_rows(content)?;
    require_columns(&headers, &["hall_no", "capacity"], "Hall list")?;

    let mut halls = Vec::new();
    for row in rows {
        let fields = parse_csv_line(row);
        let hall_no = field(&fields, &headers, "hall_no").unwrap_or("").to_string();
        let capacity_str = field(&fields, &headers, "capacity").unwrap_or("");
        let capacity: u32 = capacity_str
            .parse()
            .map_err(|_| format!("Invalid capacity '{capacity_str}' for hall '{hall_no}'"))?;
        halls.push(Hall::new(hall_no, capacity)?);
    }
    Ok(halls)
}

/// Parse an exam schedule from CSV content and resolve each row's slot
///
/// The slot comes from the first department extracted from the
/// department field; when that fails, the `time` column (if present) is
/// matched against the configured slot start times. Rows that resolve to
/// neither carry `None` and will be dropped by the allocator.
///
/// # Errors
/// Returns an error if a required column (`course_code`, `course_name`,
/// `date`, `department`) is missing.
pub fn parse_schedule(
    content: &str,
    rules: &SeatingRules,
) -> Result<Vec<ScheduledExam>, Box<dyn Error>> {
    let (headers, rows) = header_and_rows(content)?;
    require_columns(
        &headers,
        &["course_code", "course_name", "date", "department"],
        "Exam schedule",
    )?;

    let mut schedule = Vec::new();
    for row in rows {
        let fields = parse_csv_line(row);
        if fields.len() < 4 {
            continue;
        }
        let get = |name: &str| field(&fields, &headers, name).unwrap_or("").to_string();

        let department_field = get("department");
        let time_field = field(&fields, &headers, "time");
        let slot = derive_slot(&department_field, time_field, rules);

        schedule.push(
            ScheduledExam::new(get("course_code"), get("course_name"), get("date"), department_field)
                .with_slot(slot),
        );
    }
    Ok(schedule)
}

/// Resolve a schedule row's slot from its department field, falling back
/// to literal window start times in the time text
fn derive_slot(
    department_field: &str,
    time_field: Option<&str>,
    rules: &SeatingRules,
) -> Option<Slot> {
    if !department_field.is_empty() {
        let extracted = departments::extract(department_field, rules);
        if let Some(first) = extracted.first() {
            if let Some(slot) = rules.slot_for(first) {
                return Some(slot);
            }
        }
    }

    let time = time_field?;
    Slot::ALL
        .into_iter()
        .find(|&slot| time.contains(&rules.window(slot).start))
}

/// Load a student roster from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or required columns are
/// missing.
pub fn load_students<P: AsRef<Path>>(
    path: P,
    rules: &SeatingRules,
) -> Result<Vec<Student>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_students(&content, rules)
}

/// Load hall definitions from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or malformed.
pub fn load_halls<P: AsRef<Path>>(path: P) -> Result<Vec<Hall>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_halls(&content)
}

/// Load an exam schedule from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or required columns are
/// missing.
pub fn load_schedule<P: AsRef<Path>>(
    path: P,
    rules: &SeatingRules,
) -> Result<Vec<ScheduledExam>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_schedule(&content, rules)
}
