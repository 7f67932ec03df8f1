//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod client_repo;
pub mod person_repo;
pub mod project_repo;
pub mod timesheet_repo;

pub use assignment_repo::AssignmentRepo;
pub use client_repo::ClientRepo;
pub use person_repo::PersonRepo;
pub use project_repo::ProjectRepo;
pub use timesheet_repo::TimesheetRepo;
