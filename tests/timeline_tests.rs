//! End-to-end scenarios through the plan document: resolving dates, laying
//! out days, filling gaps, and suggesting off days from one JSON store.

use jiff::civil::Date;
use shiftline::{fill_gaps, BlockKind, Plan, ResolvedDayBlock, ShiftKind};

fn date(year: i16, month: i8, day: i8) -> Date {
    Date::new(year, month, day).unwrap()
}

fn fixture() -> Plan {
    let text = include_str!("fixtures/plan.json");
    let plan = Plan::from_json(text).unwrap();
    plan.validate().unwrap();
    plan
}

#[test]
fn rotation_walks_the_store_cycle() {
    let plan = fixture();
    assert_eq!(plan.resolved_block(date(2024, 1, 1)).kind(), ShiftKind::Day);
    assert_eq!(plan.resolved_block(date(2024, 1, 5)).kind(), ShiftKind::Off);
    assert_eq!(plan.resolved_block(date(2024, 1, 6)).kind(), ShiftKind::Night);
    // diff 13, position 1: back in day shifts.
    assert_eq!(plan.resolved_block(date(2024, 1, 14)).kind(), ShiftKind::Day);
    // Before the cycle start.
    assert_eq!(
        plan.resolved_block(date(2023, 12, 25)),
        ResolvedDayBlock::Undetermined
    );
}

#[test]
fn day_shift_timeline_matches_the_reference_layout() {
    let plan = fixture();
    // 2024-01-02: plain day shift, 30-minute commute, sleep 22 to 29,
    // wake and bed routines configured.
    let timeline = plan.timeline_for(date(2024, 1, 2));

    let shift = timeline.iter().find(|b| b.kind == BlockKind::Shift).unwrap();
    assert_eq!((shift.start, shift.end), (8.0, 20.0));
    assert_eq!(shift.label, "Day Shift");

    // The pre-shift commute clamps away; the ride home remains.
    let commutes: Vec<_> = timeline
        .iter()
        .filter(|b| b.kind == BlockKind::Commute)
        .collect();
    assert_eq!(commutes.len(), 1);
    assert_eq!((commutes[0].start, commutes[0].end), (20.0, 20.5));

    let sleep = timeline.iter().find(|b| b.kind == BlockKind::Sleep).unwrap();
    assert_eq!((sleep.start, sleep.end), (22.0, 29.0));

    for block in &timeline {
        assert!(block.start >= 8.0 && block.end <= 32.0 && block.end > block.start);
    }
    for pair in timeline.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn gaps_complement_the_timeline() {
    let plan = fixture();
    let timeline = plan.timeline_for(date(2024, 1, 2));
    let filled = fill_gaps(&timeline);

    // Non-open blocks pass through unchanged, in order.
    let kept: Vec<_> = filled
        .iter()
        .filter(|b| b.kind != BlockKind::Open)
        .cloned()
        .collect();
    assert_eq!(kept, timeline);

    // Open blocks tile the remainder of the window; none touch another
    // block's interior and none are slivers.
    for open in filled.iter().filter(|b| b.kind == BlockKind::Open) {
        assert!(open.hours() > 0.25);
        for block in &timeline {
            let disjoint = open.end <= block.start || open.start >= block.end;
            assert!(disjoint, "open {open:?} overlaps {block:?}");
        }
    }
}

#[test]
fn loaded_off_day_carries_its_events() {
    let plan = fixture();
    let timeline = plan.timeline_for(date(2024, 1, 5));

    let job = timeline.iter().find(|b| b.kind == BlockKind::Job).unwrap();
    assert_eq!(job.label, "Gutter repair (Sam)");
    // Travel 15 min shifts the start; 2-hour duration from the table.
    assert_eq!((job.start, job.end), (10.25, 12.25));

    let travels: Vec<_> = timeline
        .iter()
        .filter(|b| b.kind == BlockKind::Travel)
        .collect();
    assert_eq!(travels.len(), 2);

    assert!(timeline.iter().any(|b| b.label == "Workout"));
}

#[test]
fn appointment_day_uses_appointment_defaults() {
    let plan = fixture();
    let timeline = plan.timeline_for(date(2024, 1, 10));
    let appt = timeline
        .iter()
        .find(|b| b.kind == BlockKind::Appointment)
        .unwrap();
    assert_eq!(appt.label, "Dentist");
    // 9:30 plus 20 minutes travel.
    assert!((appt.start - (9.5 + 1.0 / 3.0)).abs() < 1e-9);
    assert!((appt.hours() - 1.0).abs() < 1e-9);
}

#[test]
fn suggestion_skips_the_committed_off_day() {
    let plan = fixture();
    // Jan 5 is off but carries a job and a dated task; Jan 10 carries only
    // an appointment, which does not count toward load.
    assert_eq!(plan.load(date(2024, 1, 5)), 2);
    assert_eq!(plan.load(date(2024, 1, 10)), 0);
    assert_eq!(plan.suggest(date(2024, 1, 1), None), Some(date(2024, 1, 10)));
}

#[test]
fn suggestion_honors_not_before() {
    let plan = fixture();
    assert_eq!(
        plan.suggest(date(2024, 1, 1), Some(date(2024, 1, 11))),
        Some(date(2024, 1, 11))
    );
}
