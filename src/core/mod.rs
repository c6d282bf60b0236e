//! Core module for the seating engine and its surrounding data layers

pub mod allocator;
pub mod config;
pub mod departments;
pub mod export;
pub mod models;
pub mod report;
pub mod roster;
pub mod rules;

/// Returns the current version of the `SeatPlan` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
