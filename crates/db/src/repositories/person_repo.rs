//! Repository for the `people` table.

use forecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list for `people` queries.
const COLUMNS: &str = "\
    id, timesheet_code, full_name, short_name, role, department, hourly_cost, \
    email, active, created_at, updated_at";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Create a new person.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (timesheet_code, full_name, short_name, role, department, \
                hourly_cost, email, active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7, COALESCE($8, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.timesheet_code)
            .bind(&input.full_name)
            .bind(&input.short_name)
            .bind(&input.role)
            .bind(&input.department)
            .bind(input.hourly_cost)
            .bind(&input.email)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a person by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all people, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY created_at DESC");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// List the distinct departments people belong to, for the timeline
    /// filter.
    pub async fn departments(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT department FROM people \
             WHERE department IS NOT NULL ORDER BY department ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(department,)| department).collect())
    }

    /// Update a person. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET
                timesheet_code = COALESCE($2, timesheet_code),
                full_name = COALESCE($3, full_name),
                short_name = COALESCE($4, short_name),
                role = COALESCE($5, role),
                department = COALESCE($6, department),
                hourly_cost = COALESCE($7, hourly_cost),
                email = COALESCE($8, email),
                active = COALESCE($9, active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.timesheet_code)
            .bind(&input.full_name)
            .bind(&input.short_name)
            .bind(&input.role)
            .bind(&input.department)
            .bind(input.hourly_cost)
            .bind(&input.email)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
