//! Exam slot model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed daily exam windows.
///
/// Slots are processed in declaration order, which is also the order the
/// slot report lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// First (morning) window
    I,
    /// Second (midday) window
    II,
    /// Third (afternoon) window
    III,
}

impl Slot {
    /// All slots in processing order
    pub const ALL: [Self; 3] = [Self::I, Self::II, Self::III];

    /// Roman-numeral label used in schedules and exports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        }
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            other => Err(format!("Unknown slot: '{other}'")),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
