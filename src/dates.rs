//! Calendar helpers for week and month views.

use jiff::civil::{Date, Weekday};
use jiff::Span;

/// `date` shifted by a signed number of days.
pub fn add_days(date: Date, days: i64) -> Date {
    date.checked_add(Span::new().days(days)).unwrap()
}

/// Days since Monday for a weekday (Monday = 0, Sunday = 6).
fn monday_offset(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    }
}

/// The Monday on or before `date`.
pub fn start_of_week(date: Date) -> Date {
    add_days(date, -monday_offset(date.weekday()))
}

/// The seven dates of the week containing `date`, Monday first, shifted by
/// `week_offset` whole weeks.
pub fn week_dates(date: Date, week_offset: i64) -> [Date; 7] {
    let monday = add_days(start_of_week(date), week_offset * 7);
    std::array::from_fn(|i| add_days(monday, i as i64))
}

/// A 42-cell month grid (six Monday-first weeks) covering the month that
/// contains `date`, padded with the surrounding days.
pub fn month_grid(date: Date) -> [Date; 42] {
    let first = date.first_of_month();
    let pad = monday_offset(first.weekday());
    std::array::from_fn(|i| add_days(first, i as i64 - pad))
}
