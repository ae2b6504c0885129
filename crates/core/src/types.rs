/// Work order primary keys are free-form text (e.g. `WO-2024-001`).
pub type WorkOrderId = String;

/// Manual queue position. Lower values run first; gaps, ties and negatives
/// are allowed.
pub type Position = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
