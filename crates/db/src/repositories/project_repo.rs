//! Repository for the `projects` table.

use forecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectUtilizationRow, UpdateProject};

/// Column list for `projects` queries.
const COLUMNS: &str = "\
    id, code, name, client_name, project_type, status, budget_hours, \
    budget_value, created_at, updated_at";

/// Provides CRUD operations and the utilization aggregate for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a new project.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (code, name, client_name, project_type, status, \
                budget_hours, budget_value)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'open'), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.client_name)
            .bind(&input.project_type)
            .bind(&input.status)
            .bind(input.budget_hours)
            .bind(input.budget_value)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List open projects ordered by code (the timesheet view shows only
    /// these).
    pub async fn list_open(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE status = 'open' ORDER BY code ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                client_name = COALESCE($4, client_name),
                project_type = COALESCE($5, project_type),
                status = COALESCE($6, status),
                budget_hours = COALESCE($7, budget_hours),
                budget_value = COALESCE($8, budget_value),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.client_name)
            .bind(&input.project_type)
            .bind(&input.status)
            .bind(input.budget_hours)
            .bind(input.budget_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Per-project budget vs. planned vs. confirmed hours.
    ///
    /// Planned hours come from assignments; used hours sum confirmed actuals
    /// from timesheets. Projects with no rows in either table still appear,
    /// with zero totals.
    pub async fn utilization(pool: &PgPool) -> Result<Vec<ProjectUtilizationRow>, sqlx::Error> {
        let query = "\
            SELECT p.id AS project_id, p.code, p.name, p.budget_hours, \
                   COALESCE(a.total, 0) AS assigned_hours, \
                   COALESCE(t.total, 0) AS used_hours \
            FROM projects p \
            LEFT JOIN (SELECT project_id, SUM(hours) AS total \
                       FROM assignments GROUP BY project_id) a \
                   ON a.project_id = p.id \
            LEFT JOIN (SELECT project_id, SUM(actual_hours) AS total \
                       FROM timesheets WHERE status = 'confirmed' \
                       GROUP BY project_id) t \
                   ON t.project_id = p.id \
            ORDER BY p.code ASC";
        sqlx::query_as::<_, ProjectUtilizationRow>(query)
            .fetch_all(pool)
            .await
    }
}
