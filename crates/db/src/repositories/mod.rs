//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod work_order_repo;

pub use work_order_repo::WorkOrderRepo;
