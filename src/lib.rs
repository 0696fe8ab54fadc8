//! shiftline — a shift-rotation day planner core.
//!
//! Maps calendar dates onto a repeating work rotation, lays out one extended
//! day (08:00 to 08:00 the next morning) as typed time blocks, finds the
//! open time in between, and picks the lightest upcoming off day for
//! deferred work. Every operation is a pure function over plain data: the
//! caller owns the configuration and event store, nothing is cached or
//! mutated in place, and identical input always produces identical output.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::Date;
//! use shiftline::{fill_gaps, Cycle, ShiftKind};
//!
//! let cycle = Cycle::default_rotation();
//! let start = Date::new(2024, 1, 1).unwrap();
//!
//! let block = cycle.resolve(start, Date::new(2024, 1, 5).unwrap());
//! assert_eq!(block.kind(), ShiftKind::Off);
//!
//! let open = fill_gaps(&[]);
//! assert_eq!(open[0].label, "Open (24.0 hr)");
//! ```

pub mod clock;
pub mod cycle;
pub mod dates;
pub mod display;
pub mod error;
pub mod gap;
#[cfg(feature = "serde")]
pub mod plan;
pub mod suggest;
pub mod timeline;

pub use clock::{format_hour, parse_time};
pub use cycle::{Cycle, CycleBlock, ResolvedDayBlock, ShiftKind, ShutdownOverride};
pub use error::PlanError;
pub use gap::{fill_gaps, fill_gaps_between, open_hours, MIN_GAP_HOURS};
#[cfg(feature = "serde")]
pub use plan::{Plan, TaskEntry};
pub use suggest::{suggest_day, SUGGEST_WINDOW_DAYS};
pub use timeline::{
    build_timeline, BlockKind, DayInput, PlannedEvent, SleepSchedule, SleepWindow, TimeBlock,
    DAY_END, DAY_START,
};
