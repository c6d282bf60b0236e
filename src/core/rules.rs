//! Seating rules: the static tables driving slot and department resolution
//!
//! Slot time windows, session orderings, and the per-department alias and
//! slot tables are configuration data, not behavior. They are loaded once
//! (compiled-in defaults, optionally replaced by a user TOML file) and
//! passed explicitly into the resolvers and the allocator, so tests can
//! run isolated configurations side by side.

use crate::core::models::Slot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Compiled-in default rules, mirroring the exam cell's standing tables.
const RULES_DEFAULTS: &str = include_str!("../assets/DefaultSeatingRules.toml");

/// Wall-clock window of one exam slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    /// Window start, "HH:MM"
    pub start: String,
    /// Window end, "HH:MM"
    pub end: String,
}

/// Time windows for all three slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindows {
    /// Window for slot I
    #[serde(rename = "I")]
    pub first: SlotWindow,
    /// Window for slot II
    #[serde(rename = "II")]
    pub second: SlotWindow,
    /// Window for slot III
    #[serde(rename = "III")]
    pub third: SlotWindow,
}

impl SlotWindows {
    /// Get the window for a slot
    #[must_use]
    pub const fn window(&self, slot: Slot) -> &SlotWindow {
        match slot {
            Slot::I => &self.first,
            Slot::II => &self.second,
            Slot::III => &self.third,
        }
    }
}

/// One canonical department: its code, the alias strings that map onto
/// it, and the slot it writes exams in
///
/// Entry order in the rules file is significant: it is the scan order of
/// the alias tables, which the department extractor's output order
/// depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    /// Canonical department code (e.g., "CSE")
    pub code: String,
    /// Alias strings matched as substrings of free-text department names
    pub aliases: Vec<String>,
    /// The slot this department's exams run in
    pub slot: Slot,
}

/// The full rules table set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingRules {
    /// Slot time windows
    pub slots: SlotWindows,
    /// Session name to its ordered slot list (e.g., FN = [I, II])
    pub sessions: BTreeMap<String, Vec<Slot>>,
    /// Ordered department entries
    #[serde(rename = "department")]
    pub departments: Vec<DepartmentEntry>,
}

impl SeatingRules {
    /// Parse rules from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or does not match
    /// the expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load the compiled-in default rules
    ///
    /// # Panics
    /// Panics if the embedded default rules are invalid TOML. This should
    /// never happen in practice since the defaults are compiled into the
    /// binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(RULES_DEFAULTS).expect("Failed to parse compiled-in default seating rules")
    }

    /// Load rules from a file, or fall back to the compiled-in defaults
    /// when no path is given
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed. A missing
    /// override is not silently ignored: an explicit path must load.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p)
                    .map_err(|e| format!("Failed to read rules file {}: {e}", p.display()))?;
                Self::from_toml(&content)
                    .map_err(|e| format!("Failed to parse rules file {}: {e}", p.display()))
            }
            None => Ok(Self::from_defaults()),
        }
    }

    /// Resolve the slot a department writes in
    ///
    /// Returns `None` for departments absent from the table. Callers must
    /// treat that as a normal outcome, not a fault; the validation report
    /// is where it surfaces.
    #[must_use]
    pub fn slot_for(&self, department: &str) -> Option<Slot> {
        self.departments
            .iter()
            .find(|entry| entry.code == department)
            .map(|entry| entry.slot)
    }

    /// All department codes assigned to a slot, in table order
    #[must_use]
    pub fn departments_for(&self, slot: Slot) -> Vec<&str> {
        self.departments
            .iter()
            .filter(|entry| entry.slot == slot)
            .map(|entry| entry.code.as_str())
            .collect()
    }

    /// Ordered slot list for a session
    ///
    /// Unknown sessions resolve to an empty list, which makes the
    /// allocator produce an empty arrangement rather than an error.
    #[must_use]
    pub fn session_slots(&self, session: &str) -> Vec<Slot> {
        self.sessions.get(session).cloned().unwrap_or_default()
    }

    /// Get the time window for a slot
    #[must_use]
    pub const fn window(&self, slot: Slot) -> &SlotWindow {
        self.slots.window(slot)
    }
}

impl Default for SeatingRules {
    fn default() -> Self {
        Self::from_defaults()
    }
}
