//! Repository for the `work_orders` table.
//!
//! Multi-row writes (reorder, priority sort) run inside one transaction so
//! a failure leaves the previous order intact.

use prodqueue_core::priority::priority_order;
use prodqueue_core::types::Position;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::work_order::{CreateWorkOrder, ListOrder, PositionUpdate, WorkOrder};

/// Column list for `work_orders` queries.
const COLUMNS: &str = "\
    id, name, priority, product_type, position, created_at, updated_at";

/// Provides data access for work orders.
pub struct WorkOrderRepo;

impl WorkOrderRepo {
    /// List every work order in the requested order.
    pub async fn list(pool: &SqlitePool, order: ListOrder) -> Result<Vec<WorkOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_orders ORDER BY {}",
            order.order_by()
        );
        sqlx::query_as::<_, WorkOrder>(&query).fetch_all(pool).await
    }

    /// Find a work order by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<WorkOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_orders WHERE id = ?1");
        sqlx::query_as::<_, WorkOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all work orders.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM work_orders")
            .fetch_one(executor)
            .await
    }

    /// Insert a new work order.
    ///
    /// Without an explicit position the order goes to the end of the queue
    /// (`MAX(position) + 1`, or 1 for an empty table).
    pub async fn create(pool: &SqlitePool, dto: &CreateWorkOrder) -> Result<WorkOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_orders (id, name, priority, product_type, position) \
             VALUES (?1, ?2, ?3, ?4, \
                 COALESCE(?5, (SELECT COALESCE(MAX(position), 0) + 1 FROM work_orders))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkOrder>(&query)
            .bind(&dto.id)
            .bind(&dto.name)
            .bind(&dto.priority)
            .bind(&dto.product_type)
            .bind(dto.position)
            .fetch_one(pool)
            .await
    }

    /// Write drag-and-drop positions and bump `updated_at` on each row.
    ///
    /// Ids that match no row are skipped and returned to the caller.
    pub async fn apply_positions(
        pool: &SqlitePool,
        updates: &[PositionUpdate],
    ) -> Result<Vec<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut unknown = Vec::new();

        for update in updates {
            let result = sqlx::query(
                "UPDATE work_orders \
                 SET position = ?1, updated_at = CURRENT_TIMESTAMP \
                 WHERE id = ?2",
            )
            .bind(update.position)
            .bind(&update.id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                unknown.push(update.id.clone());
            }
        }

        tx.commit().await?;
        Ok(unknown)
    }

    /// Bump `updated_at` on every row without touching positions.
    ///
    /// Returns the number of rows touched.
    pub async fn touch_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE work_orders SET updated_at = CURRENT_TIMESTAMP")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Rewrite every position in priority order (tier rank, then id).
    ///
    /// Returns the number of rows repositioned.
    pub async fn priority_sort(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rows = sqlx::query_as::<_, (String, String)>("SELECT id, priority FROM work_orders")
            .fetch_all(&mut *tx)
            .await?;

        let ordered: Vec<(String, Position)> = priority_order(rows);

        for (id, position) in &ordered {
            sqlx::query(
                "UPDATE work_orders \
                 SET position = ?1, updated_at = CURRENT_TIMESTAMP \
                 WHERE id = ?2",
            )
            .bind(position)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(ordered.len() as u64)
    }
}
