//! Handlers for the work order queue.
//!
//! Every mutating queue endpoint answers with the full list in position
//! order so the dashboard can redraw from a single response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use prodqueue_core::error::CoreError;
use prodqueue_core::schedule::{build_schedule, ScheduledSlot};
use prodqueue_core::types::Timestamp;
use prodqueue_core::validation::{validate_new_work_order, validate_reorder_ids};
use prodqueue_db::models::work_order::{CreateWorkOrder, ListOrder, ReorderWorkOrders, WorkOrder};
use prodqueue_db::repositories::WorkOrderRepo;
use prodqueue_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::{ListParams, ScheduleParams};
use crate::response::{DataResponse, WorkOrderList};
use crate::state::AppState;

/// Load the queue in position order, the shape every write endpoint returns.
async fn queue_by_position(pool: &DbPool) -> AppResult<Json<WorkOrderList>> {
    let orders = WorkOrderRepo::list(pool, ListOrder::Position).await?;
    Ok(Json(WorkOrderList::from(orders)))
}

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

/// GET /api/work-orders
///
/// List all work orders. `?order=` selects `position` (default),
/// `priority` or `id`.
pub async fn list_work_orders(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let orders = WorkOrderRepo::list(&state.pool, params.order).await?;
    Ok(Json(WorkOrderList::from(orders)))
}

/// GET /api/work-orders/{id}
pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let order = WorkOrderRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "WorkOrder",
                id: id.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: order }))
}

// ---------------------------------------------------------------------------
// Write endpoints
// ---------------------------------------------------------------------------

/// POST /api/work-orders
///
/// Create a work order. Without a position it joins the end of the queue.
pub async fn create_work_order(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateWorkOrder>,
) -> AppResult<impl IntoResponse> {
    validate_new_work_order(&input.id, &input.name, &input.priority, &input.product_type)?;

    let order = WorkOrderRepo::create(&state.pool, &input).await?;

    tracing::info!(
        work_order_id = %order.id,
        priority = %order.priority,
        position = ?order.position,
        "Work order created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// POST /api/work-orders/reorder
///
/// Persist drag-and-drop positions computed by the client. Ids that match
/// no work order are ignored.
pub async fn reorder_work_orders(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ReorderWorkOrders>,
) -> AppResult<impl IntoResponse> {
    validate_reorder_ids(input.work_orders.iter().map(|u| u.id.as_str()))?;

    let unknown = WorkOrderRepo::apply_positions(&state.pool, &input.work_orders).await?;
    if !unknown.is_empty() {
        tracing::warn!(?unknown, "Reorder referenced unknown work orders");
    }

    tracing::info!(
        requested = input.work_orders.len(),
        applied = input.work_orders.len() - unknown.len(),
        "Work orders reordered",
    );

    queue_by_position(&state.pool).await
}

/// POST /api/work-orders/refresh
///
/// Mark every work order as freshly synced. Positions are preserved.
pub async fn refresh_work_orders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let touched = WorkOrderRepo::touch_all(&state.pool).await?;
    tracing::info!(touched, "Work orders refreshed");

    queue_by_position(&state.pool).await
}

/// POST /api/work-orders/priority-sort
///
/// Rewrite positions in priority order (High, Medium, Low, other; ties by
/// id). Only runs when explicitly requested.
pub async fn priority_sort(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sorted = WorkOrderRepo::priority_sort(&state.pool).await?;
    tracing::info!(sorted, "Work orders sorted by priority");

    queue_by_position(&state.pool).await
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// A work order with its projected slot in the timeline.
#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub work_order: WorkOrder,
    #[serde(flatten)]
    pub slot: ScheduledSlot,
}

/// Body of the schedule endpoint.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub starts_at: Timestamp,
    pub completes_at: Timestamp,
    pub total_minutes: u64,
    pub entries: Vec<ScheduleEntry>,
}

/// GET /api/work-orders/schedule
///
/// Project start and end times for the queue in position order.
pub async fn get_schedule(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ScheduleParams>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let start = params.start.unwrap_or(now);

    let orders = WorkOrderRepo::list(&state.pool, ListOrder::Position).await?;
    let schedule = build_schedule(orders.iter().map(|o| o.product_type.as_str()), start, now);

    let response = ScheduleResponse {
        starts_at: schedule.starts_at,
        completes_at: schedule.completes_at,
        total_minutes: schedule.total_minutes,
        entries: orders
            .into_iter()
            .zip(schedule.slots)
            .map(|(work_order, slot)| ScheduleEntry { work_order, slot })
            .collect(),
    };

    Ok(Json(DataResponse { data: response }))
}
