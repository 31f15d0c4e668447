//! Outline-number (WBS) ordering for tasks

use std::cmp::Ordering;

use crate::core::models::Task;

/// Sort key for one task
///
/// Tasks with a numeric outline come first, ordered segment by segment, so
/// `1.2 < 1.10 < 2` and a prefix sorts before its children
/// (`2.2 < 2.2.15`). Tasks whose outline is missing or not numeric follow,
/// and the task id breaks every remaining tie.
fn sort_key(task: &Task) -> (bool, Vec<u64>, String) {
    let outline = task.wbs.as_deref().and_then(parse_outline);
    (outline.is_none(), outline.unwrap_or_default(), task.id.clone())
}

/// `None` when the outline is absent or a segment is not a number
fn parse_outline(wbs: &str) -> Option<Vec<u64>> {
    wbs.trim().split('.').map(|segment| segment.parse().ok()).collect()
}

/// Compare two tasks by their outline number
#[must_use]
pub fn compare_wbs(a: &Task, b: &Task) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort tasks in outline order
pub fn sort_by_wbs(tasks: &mut [Task]) {
    tasks.sort_by_cached_key(sort_key);
}
