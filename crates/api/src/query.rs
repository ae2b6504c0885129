//! Query parameter types for API handlers.

use prodqueue_core::types::Timestamp;
use prodqueue_db::models::work_order::ListOrder;
use serde::Deserialize;

/// `?order=position|priority|id` on work order listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub order: ListOrder,
}

/// `?start=<RFC 3339>` on the schedule endpoint. Defaults to now.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleParams {
    pub start: Option<Timestamp>,
}
