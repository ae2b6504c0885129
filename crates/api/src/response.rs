//! Shared response envelope types for API handlers.
//!
//! Single-entity responses use the `{ "data": ... }` envelope. Queue
//! listings use `{ "work_orders": [...], "count": n }`, the shape the
//! dashboard client polls.

use prodqueue_db::models::work_order::WorkOrder;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: item }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "work_orders": [...], "count": n }` listing envelope.
#[derive(Debug, Serialize)]
pub struct WorkOrderList {
    pub work_orders: Vec<WorkOrder>,
    pub count: usize,
}

impl From<Vec<WorkOrder>> for WorkOrderList {
    fn from(work_orders: Vec<WorkOrder>) -> Self {
        let count = work_orders.len();
        Self { work_orders, count }
    }
}
