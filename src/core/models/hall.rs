//! Hall model

use serde::{Deserialize, Serialize};

/// Represents a physical exam hall with a fixed seat capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    /// Hall identifier (e.g., "H1", "LAB-2")
    pub hall_no: String,

    /// Number of seats; always at least 1
    pub capacity: u32,
}

impl Hall {
    /// Create a new hall
    ///
    /// # Errors
    /// Returns an error if `capacity` is zero.
    pub fn new(hall_no: String, capacity: u32) -> Result<Self, String> {
        if capacity == 0 {
            return Err(format!("Hall '{hall_no}' must have a positive capacity"));
        }
        Ok(Self { hall_no, capacity })
    }
}
