//! Rolling routine history feeding the anti-repetition penalty.
//!
//! Only a short window of recent saved routines matters: drill ids seen
//! there get a soft scoring penalty so back-to-back plans vary without
//! shrinking the eligible pool.

use crate::Routine;
use std::collections::HashSet;

/// How many recent saved routines contribute to the history set
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Collect the drill ids used across the `window` most recent routines
///
/// `routines` is expected newest-first (as returned by
/// [`crate::store::load_recent_routines`]); entries beyond the window are
/// ignored.
pub fn recent_drill_ids(routines: &[Routine], window: usize) -> HashSet<String> {
    let ids: HashSet<String> = routines
        .iter()
        .take(window)
        .flat_map(|r| r.drill_ids())
        .map(str::to_string)
        .collect();

    tracing::debug!(
        "History set: {} drill ids from {} routines",
        ids.len(),
        routines.len().min(window)
    );
    ids
}
