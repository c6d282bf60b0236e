//! Seat assignment model

use super::Slot;
use serde::{Deserialize, Serialize};

/// One seated student: the output row of the allocator
///
/// Created only by the allocator, one record per seated student, never
/// mutated afterwards. Within a (hall, slot) pair seat numbers are
/// contiguous starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// Hall the student sits in
    pub hall_no: String,
    /// 1-based seat number, unique within (hall, slot)
    pub seat_no: u32,
    /// Student registration number
    pub reg_no: String,
    /// Student name (may be empty)
    pub name: String,
    /// Canonical department code
    pub department: String,
    /// Academic year label
    pub academic_year: String,
    /// Course code of the exam being taken
    pub course_code: String,
    /// Course name of the exam being taken
    pub course_name: String,
    /// Exam date
    pub date: String,
    /// Exam slot
    pub slot: Slot,
    /// Wall-clock start of the slot window
    pub start_time: String,
    /// Wall-clock end of the slot window
    pub end_time: String,
    /// Exam type label passed through from the caller (e.g. "Internal")
    pub exam_type: String,
}
