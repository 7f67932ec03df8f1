//! Client entity model and DTOs.
//!
//! Clients are plain CRUD records; tax-id checksum validation and masking are
//! a front-end concern and are not performed here.

use forecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub tax_id: String,
    pub legal_name: String,
    pub trade_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub segment: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1))]
    pub tax_id: String,
    #[validate(length(min = 1))]
    pub legal_name: String,
    pub trade_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub segment: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Defaults to true if omitted.
    pub active: Option<bool>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClient {
    pub tax_id: Option<String>,
    pub legal_name: Option<String>,
    pub trade_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub segment: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}
