//! Work order model and DTOs.

use prodqueue_core::priority::PRIORITY_RANK_SQL;
use prodqueue_core::types::{Position, Timestamp, WorkOrderId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `work_orders` table.
///
/// `product_type` is exposed as `productType` on the wire; the dashboard
/// client reads that name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub name: String,
    pub priority: String,
    #[serde(rename = "productType")]
    pub product_type: String,
    /// `None` for rows that were never placed.
    pub position: Option<Position>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a work order.
///
/// When `position` is omitted the order is appended to the end of the queue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkOrder {
    pub id: WorkOrderId,
    pub name: String,
    pub priority: String,
    #[serde(rename = "productType", alias = "product_type")]
    pub product_type: String,
    pub position: Option<Position>,
}

/// A single drag-and-drop position assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionUpdate {
    pub id: WorkOrderId,
    pub position: Position,
}

/// Body of `POST /api/work-orders/reorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderWorkOrders {
    pub work_orders: Vec<PositionUpdate>,
}

// ---------------------------------------------------------------------------
// Listing order
// ---------------------------------------------------------------------------

/// Sort order for listing work orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// Manual queue order. Rows without a position sort last.
    #[default]
    Position,
    /// Priority tier (High, Medium, Low, other), then id.
    Priority,
    /// Id ascending.
    Id,
}

impl ListOrder {
    /// `ORDER BY` clause body for this order.
    pub fn order_by(self) -> String {
        match self {
            Self::Position => "position IS NULL, position ASC, id ASC".to_string(),
            Self::Priority => format!("{PRIORITY_RANK_SQL}, id ASC"),
            Self::Id => "id ASC".to_string(),
        }
    }
}
