//! Scheduled exam model

use super::Slot;
use serde::{Deserialize, Serialize};

/// Represents one row of an exam schedule
///
/// The slot is resolved once when the schedule is loaded (from the
/// department field, or a time-of-day fallback) and never recomputed
/// during allocation. Rows whose slot could not be resolved carry `None`
/// and are dropped by the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledExam {
    /// Course code (unique within a schedule)
    pub course_code: String,

    /// Full course name
    pub course_name: String,

    /// Exam date as it appeared in the schedule
    pub date: String,

    /// Raw department field, e.g. "II YEAR(AGRI,EEE,ECE,MECH)"
    pub department_field: String,

    /// Resolved exam slot, if any
    pub slot: Option<Slot>,
}

impl ScheduledExam {
    /// Create a new scheduled exam with an unresolved slot
    #[must_use]
    pub const fn new(
        course_code: String,
        course_name: String,
        date: String,
        department_field: String,
    ) -> Self {
        Self {
            course_code,
            course_name,
            date,
            department_field,
            slot: None,
        }
    }

    /// Attach a resolved slot
    #[must_use]
    pub const fn with_slot(mut self, slot: Option<Slot>) -> Self {
        self.slot = slot;
        self
    }
}
