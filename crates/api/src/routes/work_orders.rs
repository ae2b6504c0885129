//! Route definitions for the work order queue.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::work_orders;
use crate::state::AppState;

/// Work order routes mounted at `/api/work-orders`.
///
/// ```text
/// GET    /                -> list_work_orders
/// POST   /                -> create_work_order
/// GET    /schedule        -> get_schedule
/// POST   /reorder         -> reorder_work_orders
/// POST   /refresh         -> refresh_work_orders
/// POST   /priority-sort   -> priority_sort
/// GET    /{id}            -> get_work_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(work_orders::list_work_orders).post(work_orders::create_work_order),
        )
        .route("/schedule", get(work_orders::get_schedule))
        .route("/reorder", post(work_orders::reorder_work_orders))
        .route("/refresh", post(work_orders::refresh_work_orders))
        .route("/priority-sort", post(work_orders::priority_sort))
        .route("/{id}", get(work_orders::get_work_order))
}
