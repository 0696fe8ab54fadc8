//! Open-time discovery: the complement of a timeline within the day window.

use crate::timeline::{BlockKind, TimeBlock, DAY_END, DAY_START};

/// Gaps at or below this length are noise from quarter-hour rounding and
/// are not reported.
pub const MIN_GAP_HOURS: f64 = 0.25;

/// Interleave `open` blocks into a timeline over the standard window
/// (08:00 to 08:00 next day). See [`fill_gaps_between`].
pub fn fill_gaps(blocks: &[TimeBlock]) -> Vec<TimeBlock> {
    fill_gaps_between(blocks, DAY_START, DAY_END)
}

/// Interleave `open` blocks into a timeline over `[day_start, day_end]`.
///
/// Blocks are taken in ascending start order; a cursor tracks the furthest
/// covered hour, and any gap longer than [`MIN_GAP_HOURS`] before the next
/// block (or before the end of the window) becomes an `open` block labeled
/// with its duration rounded to one decimal. The input blocks themselves
/// pass through untouched, overlaps included, so running the result minus
/// its open blocks back through produces the same open intervals.
pub fn fill_gaps_between(blocks: &[TimeBlock], day_start: f64, day_end: f64) -> Vec<TimeBlock> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut result = Vec::with_capacity(sorted.len() + 2);
    let mut cursor = day_start;
    for block in sorted {
        if block.start - cursor > MIN_GAP_HOURS {
            result.push(open_block(cursor, block.start));
        }
        cursor = cursor.max(block.end);
        result.push(block);
    }
    if day_end - cursor > MIN_GAP_HOURS {
        result.push(open_block(cursor, day_end));
    }
    result
}

/// Total open capacity in a timeline, in hours.
pub fn open_hours(blocks: &[TimeBlock]) -> f64 {
    fill_gaps(blocks)
        .iter()
        .filter(|b| b.kind == BlockKind::Open)
        .map(TimeBlock::hours)
        .sum()
}

fn open_block(start: f64, end: f64) -> TimeBlock {
    TimeBlock::new(start, end, format!("Open ({:.1} hr)", end - start), BlockKind::Open)
}
