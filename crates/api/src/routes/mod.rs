pub mod health;
pub mod work_orders;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /work-orders                      list, create
/// /work-orders/{id}                 get
/// /work-orders/reorder              persist drag-and-drop positions (POST)
/// /work-orders/refresh              bump updated_at, keep order (POST)
/// /work-orders/priority-sort        rewrite positions by priority (POST)
/// /work-orders/schedule             projected queue timeline (GET)
///
/// /product-times                    processing minutes per product type
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/work-orders", work_orders::router())
        .route(
            "/product-times",
            get(handlers::product_times::get_product_times),
        )
}
