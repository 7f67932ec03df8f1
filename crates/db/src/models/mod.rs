//! Entity models and DTOs.
//!
//! Each entity module holds the row struct (`FromRow` + `Serialize`) and its
//! create/update DTOs (`Deserialize`, validated at the handler boundary).

pub mod assignment;
pub mod client;
pub mod person;
pub mod project;
pub mod timesheet;
