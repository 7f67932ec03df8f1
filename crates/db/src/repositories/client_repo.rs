//! Repository for the `clients` table.

use forecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list for `clients` queries.
const COLUMNS: &str = "\
    id, tax_id, legal_name, trade_name, city, state, segment, email, phone, \
    active, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Create a new client.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (tax_id, legal_name, trade_name, city, state, segment, \
                email, phone, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.tax_id)
            .bind(&input.legal_name)
            .bind(&input.trade_name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.segment)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                tax_id = COALESCE($2, tax_id),
                legal_name = COALESCE($3, legal_name),
                trade_name = COALESCE($4, trade_name),
                city = COALESCE($5, city),
                state = COALESCE($6, state),
                segment = COALESCE($7, segment),
                email = COALESCE($8, email),
                phone = COALESCE($9, phone),
                active = COALESCE($10, active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.tax_id)
            .bind(&input.legal_name)
            .bind(&input.trade_name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.segment)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
