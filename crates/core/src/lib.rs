//! Domain types and pure logic for the production queue.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod priority;
pub mod product_times;
pub mod schedule;
pub mod types;
pub mod validation;
