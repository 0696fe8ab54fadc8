//! The plan document: the long-lived configuration and per-date event data
//! the caller owns, in the JSON shape the original planner persists to its
//! key-value store (`cycle`, `cycleStart`, `sd`, `sleepSettings`, `jobs`,
//! `appts`, `workouts`, `meals`, `wakeR`, `bedR`, `commuteMin`, `tasks`).
//!
//! The core operations stay free functions over plain data; [`Plan`] is a
//! convenience wrapper that wires them together for the CLI and for
//! consumers that already hold the whole store.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::cycle::{date_opt, Cycle, ResolvedDayBlock, ShutdownOverride};
use crate::error::PlanError;
use crate::gap::fill_gaps;
use crate::suggest::suggest_day;
use crate::timeline::{build_timeline, DayInput, PlannedEvent, SleepSchedule, TimeBlock};

/// A dated task. Only the date participates in load counting; the rest is
/// presentation data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskEntry {
    pub text: String,
    pub date: Option<String>,
    pub not_before: Option<String>,
}

/// The whole persisted planner store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plan {
    pub cycle: Cycle,
    #[serde(with = "date_opt")]
    pub cycle_start: Option<Date>,
    #[serde(rename = "sd")]
    pub shutdown: ShutdownOverride,
    #[serde(rename = "sleepSettings")]
    pub sleep: SleepSchedule,
    #[serde(rename = "wakeR")]
    pub wake_routine: Vec<String>,
    #[serde(rename = "bedR")]
    pub bed_routine: Vec<String>,
    #[serde(rename = "commuteMin")]
    pub commute_minutes: u32,
    /// Jobs keyed by ISO date (`YYYY-MM-DD`).
    pub jobs: BTreeMap<String, Vec<PlannedEvent>>,
    /// Appointments keyed by ISO date.
    #[serde(rename = "appts")]
    pub appointments: BTreeMap<String, Vec<PlannedEvent>>,
    /// Workout flags keyed by ISO date.
    pub workouts: BTreeMap<String, bool>,
    /// Meal-prep flags keyed by ISO date.
    #[serde(rename = "meals")]
    pub meal_prep: BTreeMap<String, bool>,
    pub tasks: Vec<TaskEntry>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            cycle: Cycle::default_rotation(),
            cycle_start: None,
            shutdown: ShutdownOverride::default(),
            sleep: SleepSchedule::default(),
            wake_routine: Vec::new(),
            bed_routine: Vec::new(),
            commute_minutes: 60,
            jobs: BTreeMap::new(),
            appointments: BTreeMap::new(),
            workouts: BTreeMap::new(),
            meal_prep: BTreeMap::new(),
            tasks: Vec::new(),
        }
    }
}

impl Plan {
    /// Parse a plan from its JSON store dump.
    pub fn from_json(text: &str) -> Result<Self, PlanError> {
        serde_json::from_str(text).map_err(|e| PlanError::json(e.to_string()))
    }

    /// Reject configurations resolution would only ever answer
    /// `Undetermined` for.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.cycle.blocks.is_empty() {
            return Err(PlanError::cycle("rotation has no blocks"));
        }
        if self.cycle.period_days() == 0 {
            return Err(PlanError::cycle("rotation period is zero days"));
        }
        if self.cycle_start.is_none() {
            return Err(PlanError::date("cycle start date is not set"));
        }
        Ok(())
    }

    /// Resolve the shift description for a date, override-aware. A missing
    /// cycle start behaves like a start after every date: `Undetermined`.
    pub fn resolved_block(&self, date: Date) -> ResolvedDayBlock {
        if self.shutdown.contains(date) {
            return ResolvedDayBlock::Shutdown(self.shutdown.synthetic_block());
        }
        match self.cycle_start {
            Some(start) => self.cycle.resolve(start, date),
            None => ResolvedDayBlock::Undetermined,
        }
    }

    /// Build the timeline for a date from the stored configuration and
    /// that date's events and flags.
    pub fn timeline_for(&self, date: Date) -> Vec<TimeBlock> {
        let key = date.to_string();
        let input = DayInput {
            sleep: &self.sleep,
            appointments: self
                .appointments
                .get(&key)
                .map_or(&[][..], Vec::as_slice),
            jobs: self.jobs.get(&key).map_or(&[][..], Vec::as_slice),
            workout: self.workouts.get(&key).copied().unwrap_or(false),
            meal_prep: self.meal_prep.get(&key).copied().unwrap_or(false),
            wake_routine: &self.wake_routine,
            bed_routine: &self.bed_routine,
            commute_minutes: self.commute_minutes,
        };
        build_timeline(&self.resolved_block(date), &input)
    }

    /// The timeline for a date with open blocks interleaved.
    pub fn day_with_gaps(&self, date: Date) -> Vec<TimeBlock> {
        fill_gaps(&self.timeline_for(date))
    }

    /// Commitment count for a date: jobs plus dated tasks.
    pub fn load(&self, date: Date) -> usize {
        let key = date.to_string();
        let jobs = self.jobs.get(&key).map_or(0, Vec::len);
        let tasks = self
            .tasks
            .iter()
            .filter(|t| t.date.as_deref() == Some(key.as_str()))
            .count();
        jobs + tasks
    }

    /// Suggest the lightest upcoming off day for deferred work.
    pub fn suggest(&self, today: Date, not_before: Option<Date>) -> Option<Date> {
        let start = self.cycle_start?;
        suggest_day(
            &self.cycle,
            start,
            &self.shutdown,
            today,
            not_before,
            |d| self.load(d),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::ShiftKind;
    use crate::timeline::BlockKind;

    fn date(year: i16, month: i8, day: i8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    fn store_dump() -> &'static str {
        r#"{
            "cycleStart": "2024-01-01",
            "cycle": [
                {"label":"Day Shift","type":"day","days":4,"sh":8,"eh":20},
                {"label":"Off","type":"off","days":1,"sh":null,"eh":null},
                {"label":"Night Shift","type":"night","days":4,"sh":20,"eh":8},
                {"label":"Off","type":"off","days":3,"sh":null,"eh":null}
            ],
            "commuteMin": 30,
            "sd": {"active":false,"type":"night","start":"","end":""},
            "sleepSettings": {
                "day":{"start":22,"dur":7},
                "night":{"start":9,"dur":7},
                "off":{"start":23,"dur":8}
            },
            "jobs": {
                "2024-01-05": [
                    {"name":"Gutter repair","time":"10:00 AM","duration":"2 hr","travelTime":"15 min"}
                ]
            },
            "appts": {},
            "workouts": {"2024-01-05": true},
            "meals": {},
            "wakeR": ["Hydrate"],
            "bedR": [],
            "tasks": [
                {"text":"Call doctor","date":"2024-01-05"},
                {"text":"Dishes","date":null}
            ]
        }"#
    }

    #[test]
    fn loads_the_original_store_shape() {
        let plan = Plan::from_json(store_dump()).unwrap();
        plan.validate().unwrap();
        assert_eq!(plan.cycle.period_days(), 12);
        assert_eq!(plan.commute_minutes, 30);
        assert_eq!(plan.jobs["2024-01-05"][0].title, "Gutter repair");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let plan = Plan::from_json("{}").unwrap();
        assert_eq!(plan.cycle.period_days(), 12);
        assert_eq!(plan.commute_minutes, 60);
        assert!(plan.cycle_start.is_none());
        assert!(plan.validate().is_err());
        // Without a cycle start every date is undetermined.
        assert_eq!(plan.resolved_block(date(2024, 1, 1)), ResolvedDayBlock::Undetermined);
    }

    #[test]
    fn malformed_json_reports_a_plan_error() {
        let err = Plan::from_json("not json").unwrap_err();
        assert!(matches!(err, PlanError::Json { .. }));
    }

    #[test]
    fn degenerate_cycles_fail_validation_but_still_resolve() {
        let plan = Plan::from_json(
            r#"{"cycleStart":"2024-01-01","cycle":[{"label":"Off","type":"off","days":0}]}"#,
        )
        .unwrap();
        assert!(matches!(plan.validate(), Err(PlanError::Cycle { .. })));
        assert_eq!(plan.resolved_block(date(2024, 6, 1)), ResolvedDayBlock::Undetermined);
    }

    #[test]
    fn timeline_pulls_the_dates_events_and_flags() {
        let plan = Plan::from_json(store_dump()).unwrap();
        // Jan 5 is the off day: job with travel, workout, wake routine.
        let timeline = plan.timeline_for(date(2024, 1, 5));
        assert!(timeline.iter().any(|b| b.kind == BlockKind::Job));
        assert!(timeline.iter().any(|b| b.kind == BlockKind::Travel));
        assert!(timeline.iter().any(|b| b.label == "Workout"));
        assert!(timeline.iter().all(|b| b.kind != BlockKind::Shift));

        // A day-shift date has the shift but none of Jan 5's extras.
        let timeline = plan.timeline_for(date(2024, 1, 2));
        assert!(timeline.iter().any(|b| b.kind == BlockKind::Shift));
        assert!(timeline.iter().all(|b| b.kind != BlockKind::Job));
    }

    #[test]
    fn day_with_gaps_covers_the_window() {
        let plan = Plan::from_json(store_dump()).unwrap();
        let filled = plan.day_with_gaps(date(2024, 1, 2));
        assert!(filled.iter().any(|b| b.kind == BlockKind::Open));
        // Non-open blocks match the raw timeline.
        let raw = plan.timeline_for(date(2024, 1, 2));
        let kept: Vec<_> = filled
            .into_iter()
            .filter(|b| b.kind != BlockKind::Open)
            .collect();
        assert_eq!(kept, raw);
    }

    #[test]
    fn load_counts_jobs_and_dated_tasks() {
        let plan = Plan::from_json(store_dump()).unwrap();
        assert_eq!(plan.load(date(2024, 1, 5)), 2);
        assert_eq!(plan.load(date(2024, 1, 6)), 0);
    }

    #[test]
    fn suggest_avoids_the_loaded_off_day() {
        let plan = Plan::from_json(store_dump()).unwrap();
        // Jan 5 carries a job and a task; Jan 10 is the next clean off day.
        let best = plan.suggest(date(2024, 1, 1), None);
        assert_eq!(best, Some(date(2024, 1, 10)));
    }

    #[test]
    fn shutdown_in_store_overrides_resolution() {
        let mut plan = Plan::from_json(store_dump()).unwrap();
        plan.shutdown = ShutdownOverride {
            active: true,
            kind: ShiftKind::Night,
            start: Some(date(2024, 2, 1)),
            end: Some(date(2024, 2, 10)),
        };
        let block = plan.resolved_block(date(2024, 2, 5));
        assert!(block.is_override());
        assert_eq!(block.kind(), ShiftKind::Night);
    }
}
