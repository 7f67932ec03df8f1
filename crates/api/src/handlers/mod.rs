//! HTTP handler implementations, grouped by resource.

pub mod assignments;
pub mod clients;
pub mod people;
pub mod projects;
pub mod reports;
pub mod timeline;
pub mod timesheets;
