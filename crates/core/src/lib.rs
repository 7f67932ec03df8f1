//! Forecast domain logic.
//!
//! Pure, I/O-free building blocks for the resource-planning backend:
//! calendar range generation, the in-memory allocation working set and its
//! reconciliation diff, overcommit evaluation, the timesheet edit window and
//! planned-vs-confirmed state, and hour aggregation.

pub mod aggregate;
pub mod allocation;
pub mod calendar;
pub mod edit_window;
pub mod error;
pub mod overcommit;
pub mod timesheet;
pub mod types;
