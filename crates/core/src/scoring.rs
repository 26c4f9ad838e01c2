//! Scoring module - classic line-clear scoring and level progression
//!
//! - Points per clear come from [`LINE_SCORES`] times the level that was in
//!   effect before the clear.
//! - Level is `lines / 10 + 1`.
//! - Drop interval starts at 1000ms and loses 100ms per level, down to 100ms.

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at once on `level` (1-based).
///
/// More than four rows can only happen on a hand-prepared board; it scores
/// as four.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level reached after clearing `lines` rows in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Get drop interval in milliseconds for a given level
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
