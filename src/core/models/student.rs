//! Student model

use serde::{Deserialize, Serialize};

/// Represents an exam candidate from an uploaded roster
///
/// Identity is the registration number; the department field is expected
/// to hold a canonical code (the roster loader normalizes it on the way
/// in). Records are immutable during an allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Registration number (unique identifier)
    pub reg_no: String,

    /// Student name; empty when the roster has no name column
    pub name: String,

    /// Canonical department code (e.g., "CSE", "ECE")
    pub department: String,

    /// Academic year label (I/II/III/IV)
    pub academic_year: String,

    /// Section label within the year
    pub section: String,

    /// Current semester label
    pub semester: String,
}

impl Student {
    /// Create a new student record
    ///
    /// # Arguments
    /// * `reg_no` - Registration number
    /// * `department` - Canonical department code
    /// * `academic_year` - Year label (I/II/III/IV)
    #[must_use]
    pub const fn new(reg_no: String, department: String, academic_year: String) -> Self {
        Self {
            reg_no,
            name: String::new(),
            department,
            academic_year,
            section: String::new(),
            semester: String::new(),
        }
    }

    /// Set the student name
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }
}
