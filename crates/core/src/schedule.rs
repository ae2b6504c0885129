//! Queue timeline projection.
//!
//! Work orders are processed one after another in queue order. Each slot
//! starts when the previous one ends and lasts the processing time of its
//! product type.

use chrono::Duration;
use serde::Serialize;

use crate::product_times::process_minutes;
use crate::types::Timestamp;

/// State of a slot in the projected queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    InProgress,
    Queued,
}

/// One projected slot in the queue timeline.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledSlot {
    pub process_minutes: u32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: SlotStatus,
    /// Completion percentage, `0.0..=100.0`. Always 0 for queued slots.
    pub progress_percent: f64,
}

/// Projected timeline for a whole queue.
#[derive(Debug, Clone, Serialize)]
pub struct QueueSchedule {
    pub slots: Vec<ScheduledSlot>,
    pub total_minutes: u64,
    pub starts_at: Timestamp,
    pub completes_at: Timestamp,
}

/// Build the timeline for product types given in queue order.
///
/// The first slot is in progress as of `start`; `now` determines how far
/// along it is.
pub fn build_schedule<'a, I>(product_types: I, start: Timestamp, now: Timestamp) -> QueueSchedule
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cursor = start;
    let mut total_minutes: u64 = 0;

    let slots = product_types
        .into_iter()
        .enumerate()
        .map(|(index, product_type)| {
            let minutes = process_minutes(product_type);
            let start_time = cursor;
            let end_time = start_time + Duration::minutes(i64::from(minutes));
            cursor = end_time;
            total_minutes += u64::from(minutes);

            let (status, progress_percent) = if index == 0 {
                (
                    SlotStatus::InProgress,
                    progress_between(start_time, end_time, now),
                )
            } else {
                (SlotStatus::Queued, 0.0)
            };

            ScheduledSlot {
                process_minutes: minutes,
                start_time,
                end_time,
                status,
                progress_percent,
            }
        })
        .collect();

    QueueSchedule {
        slots,
        total_minutes,
        starts_at: start,
        completes_at: cursor,
    }
}

/// Percentage of `[start, end]` elapsed at `now`, clamped to `0..=100`.
pub fn progress_between(start: Timestamp, end: Timestamp, now: Timestamp) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 100.0;
    }
    let elapsed = (now - start).num_milliseconds();
    (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
