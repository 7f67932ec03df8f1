//! Repository for the `assignments` table, including the reconciliation
//! pass that makes the stored row set match a desired working set exactly.

use forecast_core::allocation::{self, Allocation, AllocationSet};
use forecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::{Assignment, AssignmentKeyRow, ReconcileOutcome};

/// Column list for `assignments` queries.
const COLUMNS: &str = "id, person_id, project_id, date, hours, created_at";

/// Provides hydration queries and the reconciliation pass for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    // ── Hydration ────────────────────────────────────────────────────────

    /// Load the full working set (the timeline view is unfiltered by date;
    /// week filtering happens at render time).
    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments ORDER BY date ASC");
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    /// Load one person's assignments (timesheet view scope).
    pub async fn list_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments WHERE person_id = $1 ORDER BY date ASC"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(person_id)
            .fetch_all(pool)
            .await
    }

    // ── Reconciliation ───────────────────────────────────────────────────

    /// Bulk conflict-aware upsert keyed on the natural key: one statement,
    /// existing rows get their hours overwritten, absent rows are inserted.
    pub async fn upsert_many<'e>(
        executor: impl sqlx::PgExecutor<'e>,
        rows: &[Allocation],
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }
        let person_ids: Vec<DbId> = rows.iter().map(|r| r.person_id).collect();
        let project_ids: Vec<DbId> = rows.iter().map(|r| r.project_id).collect();
        let dates: Vec<chrono::NaiveDate> = rows.iter().map(|r| r.date).collect();
        let hours: Vec<f64> = rows.iter().map(|r| r.hours).collect();

        let result = sqlx::query(
            "INSERT INTO assignments (person_id, project_id, date, hours)
             SELECT * FROM UNNEST($1::uuid[], $2::uuid[], $3::date[], $4::float8[])
             ON CONFLICT (person_id, project_id, date)
                DO UPDATE SET hours = EXCLUDED.hours",
        )
        .bind(&person_ids)
        .bind(&project_ids)
        .bind(&dates)
        .bind(&hours)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Bulk delete by surrogate id.
    pub async fn delete_by_ids<'e>(
        executor: impl sqlx::PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM assignments WHERE id = ANY($1)")
            .bind(ids)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Make the `assignments` table equal the desired working set.
    ///
    /// Upserts the desired rows, then deletes every stored row whose natural
    /// key is absent from the desired set. Runs in one transaction; on
    /// success the table holds exactly the desired rows — no orphans, no
    /// duplicates per key. Applying the same set twice deletes nothing on
    /// the second pass.
    pub async fn reconcile(
        pool: &PgPool,
        desired: &AllocationSet,
    ) -> Result<ReconcileOutcome, sqlx::Error> {
        let rows = desired.rows();

        let mut tx = pool.begin().await?;

        let upserted = Self::upsert_many(&mut *tx, &rows).await?;

        let stored: Vec<AssignmentKeyRow> =
            sqlx::query_as("SELECT id, person_id, project_id, date FROM assignments")
                .fetch_all(&mut *tx)
                .await?;
        let orphans =
            allocation::orphan_ids(desired, stored.into_iter().map(AssignmentKeyRow::into_parts));

        let deleted = Self::delete_by_ids(&mut *tx, &orphans).await?;

        tx.commit().await?;

        tracing::debug!(upserted, deleted, "assignments reconciled");
        Ok(ReconcileOutcome { upserted, deleted })
    }
}
