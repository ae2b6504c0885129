//! Priority tiers and the ranking used by the priority sort.
//!
//! Priorities are stored as free text. The three known labels rank ahead of
//! anything else; matching is exact, so `"high"` is an unranked priority.

use crate::types::Position;

// ---------------------------------------------------------------------------
// Tier enum
// ---------------------------------------------------------------------------

/// Known priority tier of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
    /// Any label that is not one of the known tiers.
    Other,
}

impl PriorityTier {
    /// Classify a stored priority label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Other,
        }
    }

    /// Sort rank, 1 (first) through 4 (last).
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Other => 4,
        }
    }
}

/// SQL expression ranking the `priority` column the same way as
/// [`PriorityTier::rank`]. Used for `ORDER BY` in the repository layer.
pub const PRIORITY_RANK_SQL: &str = "\
    CASE priority \
        WHEN 'High' THEN 1 \
        WHEN 'Medium' THEN 2 \
        WHEN 'Low' THEN 3 \
        ELSE 4 \
    END";

// ---------------------------------------------------------------------------
// Priority sort
// ---------------------------------------------------------------------------

/// Compute fresh queue positions in priority order.
///
/// Takes `(id, priority)` pairs in any order and returns `(id, position)`
/// pairs ordered by tier rank, ties broken by id ascending. Positions are
/// 1-based and contiguous.
pub fn priority_order<I, S, P>(items: I) -> Vec<(String, Position)>
where
    I: IntoIterator<Item = (S, P)>,
    S: Into<String>,
    P: AsRef<str>,
{
    let mut ranked: Vec<(u8, String)> = items
        .into_iter()
        .map(|(id, priority)| (PriorityTier::from_label(priority.as_ref()).rank(), id.into()))
        .collect();

    ranked.sort();

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (_, id))| (id, index as Position + 1))
        .collect()
}
