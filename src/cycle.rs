//! Shift-rotation resolution: mapping calendar dates onto a repeating cycle.
//!
//! A [`Cycle`] is an ordered sequence of [`CycleBlock`]s ("4 days on, 1 off,
//! 4 nights, 3 off") anchored at a start date. Resolution is plain modular
//! day arithmetic; a manually activated [`ShutdownOverride`] can temporarily
//! replace the rotation's answer for a date range.

use jiff::civil::Date;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of shift a rotation block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftKind {
    Day,
    Night,
    Off,
}

impl ShiftKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Off => "off",
        }
    }

    pub fn is_working(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// One segment of the repeating rotation.
///
/// `start_hour`/`end_hour` are hours of day and may wrap past midnight
/// (`end_hour <= start_hour` means the shift ends the next morning). Off
/// blocks carry no hours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleBlock {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ShiftKind,
    #[cfg_attr(feature = "serde", serde(rename = "days"))]
    pub length_days: u32,
    #[cfg_attr(feature = "serde", serde(rename = "sh", default))]
    pub start_hour: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "eh", default))]
    pub end_hour: Option<f64>,
}

impl CycleBlock {
    /// A working segment with fixed hours.
    pub fn working(
        label: impl Into<String>,
        kind: ShiftKind,
        length_days: u32,
        start_hour: f64,
        end_hour: f64,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            length_days,
            start_hour: Some(start_hour),
            end_hour: Some(end_hour),
        }
    }

    /// An off segment of the given length.
    pub fn off(length_days: u32) -> Self {
        Self {
            label: "Off".to_string(),
            kind: ShiftKind::Off,
            length_days,
            start_hour: None,
            end_hour: None,
        }
    }
}

/// An ordered, repeating sequence of rotation blocks.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cycle {
    pub blocks: Vec<CycleBlock>,
}

impl Cycle {
    pub fn new(blocks: Vec<CycleBlock>) -> Self {
        Self { blocks }
    }

    /// The 4-on / 1-off / 4-nights / 3-off rotation the original planner
    /// ships as its default.
    pub fn default_rotation() -> Self {
        Self::new(vec![
            CycleBlock::working("Day Shift", ShiftKind::Day, 4, 8.0, 20.0),
            CycleBlock::off(1),
            CycleBlock::working("Night Shift", ShiftKind::Night, 4, 20.0, 8.0),
            CycleBlock::off(3),
        ])
    }

    /// Total length of one rotation in days.
    pub fn period_days(&self) -> u32 {
        self.blocks.iter().map(|b| b.length_days).sum()
    }

    /// Resolve the rotation block active on `date`.
    ///
    /// Dates before `cycle_start` resolve to [`ResolvedDayBlock::Undetermined`],
    /// as does every date when the rotation is empty or all-zero-length
    /// (`period_days() == 0` must not reach the modulo).
    pub fn resolve(&self, cycle_start: Date, date: Date) -> ResolvedDayBlock {
        let diff = days_between(cycle_start, date);
        if diff < 0 {
            return ResolvedDayBlock::Undetermined;
        }
        let period = self.period_days();
        if period == 0 {
            return ResolvedDayBlock::Undetermined;
        }
        let mut pos = (diff % i64::from(period)) as u32;
        for block in &self.blocks {
            if pos < block.length_days {
                return ResolvedDayBlock::Rotation(block.clone());
            }
            pos -= block.length_days;
        }
        // pos < period, and period is the sum of the lengths just walked.
        unreachable!("cycle position {pos} outside period {period}")
    }

    /// Resolve like [`Cycle::resolve`], but let an active shutdown override
    /// replace the rotation's answer for dates inside its range.
    pub fn resolve_with_override(
        &self,
        cycle_start: Date,
        shutdown: &ShutdownOverride,
        date: Date,
    ) -> ResolvedDayBlock {
        if shutdown.contains(date) {
            return ResolvedDayBlock::Shutdown(shutdown.synthetic_block());
        }
        self.resolve(cycle_start, date)
    }
}

/// A manually activated date range that replaces the rotation's output with
/// a fixed day (08:00-20:00) or night (20:00-08:00) shift.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShutdownOverride {
    pub active: bool,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ShiftKind,
    #[cfg_attr(feature = "serde", serde(with = "date_opt"))]
    pub start: Option<Date>,
    /// Open-ended when absent: the override applies from `start` onward.
    #[cfg_attr(feature = "serde", serde(with = "date_opt"))]
    pub end: Option<Date>,
}

impl Default for ShutdownOverride {
    fn default() -> Self {
        Self {
            active: false,
            kind: ShiftKind::Night,
            start: None,
            end: None,
        }
    }
}

impl ShutdownOverride {
    /// Whether the override applies on `date`. An override without a start
    /// date never applies, active or not.
    pub fn contains(&self, date: Date) -> bool {
        if !self.active {
            return false;
        }
        let Some(start) = self.start else {
            return false;
        };
        if date < start {
            return false;
        }
        match self.end {
            Some(end) => date <= end,
            None => true,
        }
    }

    /// The fixed shift description this override substitutes for the
    /// rotation's answer.
    pub fn synthetic_block(&self) -> CycleBlock {
        match self.kind {
            ShiftKind::Night => {
                CycleBlock::working("Shutdown Nights", ShiftKind::Night, 1, 20.0, 8.0)
            }
            // The override UI only offers day or night; anything else
            // falls back to days.
            _ => CycleBlock::working("Shutdown Days", ShiftKind::Day, 1, 8.0, 20.0),
        }
    }
}

/// The shift description that applies to one calendar date.
///
/// `Undetermined` means the date precedes the cycle start (or the cycle has
/// no period). Consumers render it exactly like an off day; this is a
/// documented simplification of the original design, kept distinct in the
/// type so stricter callers can still tell the two apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "source", content = "block", rename_all = "lowercase")
)]
pub enum ResolvedDayBlock {
    /// Resolved from the rotation itself.
    Rotation(CycleBlock),
    /// Synthesized by an active shutdown override.
    Shutdown(CycleBlock),
    /// The date precedes the cycle start.
    Undetermined,
}

impl ResolvedDayBlock {
    /// The underlying block, if any.
    pub fn block(&self) -> Option<&CycleBlock> {
        match self {
            Self::Rotation(block) | Self::Shutdown(block) => Some(block),
            Self::Undetermined => None,
        }
    }

    /// Display kind. `Undetermined` reports `Off`.
    pub fn kind(&self) -> ShiftKind {
        self.block().map_or(ShiftKind::Off, |b| b.kind)
    }

    pub fn is_working(&self) -> bool {
        self.kind().is_working()
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Self::Shutdown(_))
    }

    /// Shift hours normalized into the extended day window: when the end
    /// hour wraps past midnight it is pushed 24 hours forward. `None` for
    /// off days, undetermined days, and blocks without hours.
    pub fn shift_hours(&self) -> Option<(f64, f64)> {
        let block = self.block()?;
        if !block.kind.is_working() {
            return None;
        }
        let start = block.start_hour?;
        let mut end = block.end_hour?;
        if end <= start {
            end += 24.0;
        }
        Some((start, end))
    }
}

/// Signed whole days from `a` to `b`.
pub(crate) fn days_between(a: Date, b: Date) -> i64 {
    i64::from(a.until(b).unwrap().get_days())
}

/// Serialize `Option<Date>` as an ISO date string, accepting `null` or `""`
/// as absent (the original store uses empty strings for unset dates).
#[cfg(feature = "serde")]
pub(crate) mod date_opt {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<Date>, ser: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => ser.serialize_some(&d.to_string()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Date>, D::Error> {
        let text: Option<String> = Option::deserialize(de)?;
        match text.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
