//! Timeline construction: laying out one extended day as typed time blocks.
//!
//! The day window runs from 08:00 (`DAY_START`, hour 8) to 08:00 the next
//! morning (`DAY_END`, hour 32); raw hours before 8 belong to the tail of
//! the window and are shifted forward by 24 before placement. Blocks may
//! overlap; the builder never merges or reflows them, the renderer decides
//! what overlapping blocks look like.

use crate::clock::parse_time;
use crate::cycle::{ResolvedDayBlock, ShiftKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First hour of the extended day window (08:00).
pub const DAY_START: f64 = 8.0;
/// Last hour of the extended day window (08:00 next day).
pub const DAY_END: f64 = 32.0;

/// Default event length when the duration label is unknown or missing.
pub const DEFAULT_APPOINTMENT_HOURS: f64 = 1.0;
pub const DEFAULT_JOB_HOURS: f64 = 1.5;

const WAKE_ROUTINE_HOURS: f64 = 0.75;
const BED_ROUTINE_HOURS: f64 = 1.0;
const WORKOUT_HOURS: f64 = 1.5;
const MEAL_PREP_HOURS: f64 = 1.0;

/// Duration labels offered by the planner UI, mapped to fractional hours.
/// Labels outside the table fall back to the per-kind default.
pub const DURATION_TABLE: &[(&str, f64)] = &[
    ("30 min", 0.5),
    ("45 min", 0.75),
    ("1 hr", 1.0),
    ("1.5 hr", 1.5),
    ("2 hr", 2.0),
    ("2.5 hr", 2.5),
    ("3 hr", 3.0),
    ("4 hr", 4.0),
    ("All day", 8.0),
];

/// Travel-time labels, mapped to fractional hours. Unknown labels mean no
/// travel.
pub const TRAVEL_TABLE: &[(&str, f64)] = &[
    ("5 min", 5.0 / 60.0),
    ("10 min", 10.0 / 60.0),
    ("15 min", 0.25),
    ("20 min", 1.0 / 3.0),
    ("30 min", 0.5),
    ("45 min", 0.75),
    ("1 hr", 1.0),
    ("1.5 hr", 1.5),
];

/// Hours for a duration label, falling back to `default`.
pub fn duration_hours(label: Option<&str>, default: f64) -> f64 {
    lookup(DURATION_TABLE, label).unwrap_or(default)
}

/// Hours for a travel-time label, falling back to zero.
pub fn travel_hours(label: Option<&str>) -> f64 {
    lookup(TRAVEL_TABLE, label).unwrap_or(0.0)
}

fn lookup(table: &[(&str, f64)], label: Option<&str>) -> Option<f64> {
    let label = label?;
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, hours)| *hours)
}

/// What a timeline block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockKind {
    Shift,
    Commute,
    Sleep,
    Routine,
    Job,
    Appointment,
    Travel,
    Open,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Commute => "commute",
            Self::Sleep => "sleep",
            Self::Routine => "routine",
            Self::Job => "job",
            Self::Appointment => "appointment",
            Self::Travel => "travel",
            Self::Open => "open",
        }
    }
}

/// One interval in a built timeline, in fractional hours within the
/// extended day window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeBlock {
    pub start: f64,
    pub end: f64,
    pub label: String,
    pub kind: BlockKind,
}

impl TimeBlock {
    pub fn new(start: f64, end: f64, label: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            kind,
        }
    }

    /// Block length in hours.
    pub fn hours(&self) -> f64 {
        self.end - self.start
    }
}

/// Sleep window for one shift kind: start hour of day plus duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SleepWindow {
    pub start: f64,
    #[cfg_attr(feature = "serde", serde(rename = "dur"))]
    pub duration: f64,
}

/// Per-shift-kind sleep configuration. Missing kinds fall back to the
/// planner defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SleepSchedule {
    pub day: SleepWindow,
    pub night: SleepWindow,
    pub off: SleepWindow,
}

impl Default for SleepSchedule {
    fn default() -> Self {
        Self {
            day: SleepWindow {
                start: 22.0,
                duration: 7.0,
            },
            night: SleepWindow {
                start: 9.0,
                duration: 7.0,
            },
            off: SleepWindow {
                start: 23.0,
                duration: 8.0,
            },
        }
    }
}

impl SleepSchedule {
    pub fn for_kind(&self, kind: ShiftKind) -> SleepWindow {
        match kind {
            ShiftKind::Day => self.day,
            ShiftKind::Night => self.night,
            ShiftKind::Off => self.off,
        }
    }
}

/// A job or appointment as the caller stores it. The builder only reads the
/// free-text time, the duration label, and the travel-time label; everything
/// else is presentation data it passes through into block labels.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PlannedEvent {
    /// Jobs store this under `name` in the original data, appointments
    /// under `title`.
    #[cfg_attr(feature = "serde", serde(alias = "name"))]
    pub title: String,
    pub person: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub travel_time: Option<String>,
}

impl PlannedEvent {
    /// A titled event at a free-text time.
    pub fn at(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: Some(time.into()),
            ..Self::default()
        }
    }

    fn display_label(&self) -> String {
        match &self.person {
            Some(person) => format!("{} ({})", self.title, person),
            None => self.title.clone(),
        }
    }
}

/// Everything beyond the resolved shift that shapes one day's timeline.
#[derive(Debug, Clone, Copy)]
pub struct DayInput<'a> {
    pub sleep: &'a SleepSchedule,
    pub appointments: &'a [PlannedEvent],
    pub jobs: &'a [PlannedEvent],
    pub workout: bool,
    pub meal_prep: bool,
    pub wake_routine: &'a [String],
    pub bed_routine: &'a [String],
    pub commute_minutes: u32,
}

impl<'a> DayInput<'a> {
    /// An empty day: no events, routines, workout, meal prep, or commute.
    pub fn bare(sleep: &'a SleepSchedule) -> Self {
        Self {
            sleep,
            appointments: &[],
            jobs: &[],
            workout: false,
            meal_prep: false,
            wake_routine: &[],
            bed_routine: &[],
            commute_minutes: 0,
        }
    }
}

/// Assemble the ordered timeline for one date.
///
/// Placement rules, in emission order: shift with flanking commutes, sleep
/// window, wake routine right after sleep, bed routine ending at sleep
/// start, appointments then jobs (each flanked by travel blocks when a
/// travel time is known), workout and meal prep anchored after the later of
/// wake-routine end and arrival home. Blocks are clamped into
/// `[DAY_START, DAY_END]`, dropped when clamping empties them, and stably
/// sorted by start. Overlaps survive on purpose.
pub fn build_timeline(resolved: &ResolvedDayBlock, input: &DayInput) -> Vec<TimeBlock> {
    let mut blocks = Vec::new();
    let commute = f64::from(input.commute_minutes) / 60.0;

    let shift = resolved.shift_hours();
    if let Some((shift_start, shift_end)) = shift {
        if commute > 0.0 {
            blocks.push(TimeBlock::new(
                shift_start - commute,
                shift_start,
                "Commute to work",
                BlockKind::Commute,
            ));
            blocks.push(TimeBlock::new(
                shift_end,
                shift_end + commute,
                "Commute home",
                BlockKind::Commute,
            ));
        }
        let label = match resolved.kind() {
            ShiftKind::Night => "Night Shift",
            _ => "Day Shift",
        };
        blocks.push(TimeBlock::new(shift_start, shift_end, label, BlockKind::Shift));
    }

    let sleep = input.sleep.for_kind(resolved.kind());
    let mut sleep_start = sleep.start;
    if sleep_start < DAY_START {
        sleep_start += 24.0;
    }
    let sleep_end = sleep_start + sleep.duration;
    blocks.push(TimeBlock::new(sleep_start, sleep_end, "Sleep", BlockKind::Sleep));

    // The wake-routine end doubles as the workout/meal-prep anchor, so it
    // exists even when no routine block is emitted.
    let wake_end = sleep_end + WAKE_ROUTINE_HOURS;
    if !input.wake_routine.is_empty() {
        blocks.push(TimeBlock::new(
            sleep_end,
            wake_end,
            format!("Wake Routine ({} steps)", input.wake_routine.len()),
            BlockKind::Routine,
        ));
    }
    if !input.bed_routine.is_empty() && sleep_start - BED_ROUTINE_HOURS >= DAY_START {
        blocks.push(TimeBlock::new(
            sleep_start - BED_ROUTINE_HOURS,
            sleep_start,
            format!("Bed Routine ({} steps)", input.bed_routine.len()),
            BlockKind::Routine,
        ));
    }

    for appointment in input.appointments {
        push_event(
            &mut blocks,
            appointment,
            BlockKind::Appointment,
            DEFAULT_APPOINTMENT_HOURS,
        );
    }
    for job in input.jobs {
        push_event(&mut blocks, job, BlockKind::Job, DEFAULT_JOB_HOURS);
    }

    // Hour the worker is back home: shift end plus the commute, or the top
    // of the window on non-working days.
    let home = match shift {
        Some((_, shift_end)) => shift_end + commute,
        None => DAY_START,
    };
    let anchor = wake_end.max(home);
    if input.workout {
        let start = anchor + 0.25;
        blocks.push(TimeBlock::new(
            start,
            start + WORKOUT_HOURS,
            "Workout",
            BlockKind::Routine,
        ));
    }
    if input.meal_prep {
        let offset = if input.workout { 2.0 } else { 0.5 };
        let start = anchor + offset;
        blocks.push(TimeBlock::new(
            start,
            start + MEAL_PREP_HOURS,
            "Meal Prep",
            BlockKind::Routine,
        ));
    }

    let mut timeline: Vec<TimeBlock> = blocks
        .into_iter()
        .filter_map(|mut block| {
            block.start = block.start.max(DAY_START);
            block.end = block.end.min(DAY_END);
            (block.end > block.start).then_some(block)
        })
        .collect();
    timeline.sort_by(|a, b| a.start.total_cmp(&b.start));
    timeline
}

/// Emit travel-to, event, travel-from for one job or appointment. Events
/// without a parseable time are skipped entirely.
fn push_event(blocks: &mut Vec<TimeBlock>, event: &PlannedEvent, kind: BlockKind, default_hours: f64) {
    let Some(hour) = event.time.as_deref().and_then(parse_time) else {
        return;
    };
    let mut start = if hour < DAY_START { hour + 24.0 } else { hour };
    let duration = duration_hours(event.duration.as_deref(), default_hours);
    let travel = travel_hours(event.travel_time.as_deref());

    if travel > 0.0 {
        blocks.push(TimeBlock::new(
            start,
            start + travel,
            format!("Travel to {}", event.title),
            BlockKind::Travel,
        ));
        start += travel;
    }
    blocks.push(TimeBlock::new(
        start,
        start + duration,
        event.display_label(),
        kind,
    ));
    if travel > 0.0 {
        blocks.push(TimeBlock::new(
            start + duration,
            start + duration + travel,
            format!("Travel from {}", event.title),
            BlockKind::Travel,
        ));
    }
}
