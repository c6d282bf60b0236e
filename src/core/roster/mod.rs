//! Roster loading: CSV readers for students, halls and schedules

pub mod csv_parser;

pub use csv_parser::{load_halls, load_schedule, load_students};
