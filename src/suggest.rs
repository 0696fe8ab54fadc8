//! Off-day suggestion: a greedy scan for the lightest upcoming off day,
//! used to place deferred follow-up work.

use jiff::civil::Date;

use crate::cycle::{Cycle, ShiftKind, ShutdownOverride};
use crate::dates::add_days;

/// How far ahead the suggestion scan looks, in days.
pub const SUGGEST_WINDOW_DAYS: i64 = 21;

/// Find the lowest-load off day in the [`SUGGEST_WINDOW_DAYS`] window
/// starting at `not_before` or `today`, whichever is later.
///
/// Days are resolved override-aware; only genuine off days qualify, so a
/// date before the cycle start (which merely renders as off) is never
/// suggested. `load_by_date` is the caller's commitment count for a date,
/// typically jobs plus dated tasks. Ties keep the earliest day. Returns
/// `None` when no off day exists in the window.
///
/// `today` is an explicit argument so the search stays deterministic; the
/// CLI passes the current civil date.
pub fn suggest_day(
    cycle: &Cycle,
    cycle_start: Date,
    shutdown: &ShutdownOverride,
    today: Date,
    not_before: Option<Date>,
    load_by_date: impl Fn(Date) -> usize,
) -> Option<Date> {
    let from = match not_before {
        Some(d) if d > today => d,
        _ => today,
    };

    let mut best: Option<(Date, usize)> = None;
    for offset in 0..SUGGEST_WINDOW_DAYS {
        let date = add_days(from, offset);
        let resolved = cycle.resolve_with_override(cycle_start, shutdown, date);
        if resolved.block().map(|b| b.kind) != Some(ShiftKind::Off) {
            continue;
        }
        let load = load_by_date(date);
        match best {
            Some((_, best_load)) if load >= best_load => {}
            _ => best = Some((date, load)),
        }
    }
    best.map(|(date, _)| date)
}
