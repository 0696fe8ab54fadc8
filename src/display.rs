use std::fmt;

use crate::clock::format_hour;
use crate::cycle::{ResolvedDayBlock, ShiftKind};
use crate::timeline::{BlockKind, TimeBlock};

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}  {} [{}]",
            format_hour(self.start),
            format_hour(self.end),
            self.label,
            self.kind
        )
    }
}

impl fmt::Display for ResolvedDayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undetermined => write!(f, "Off (before cycle start)"),
            Self::Rotation(block) | Self::Shutdown(block) => {
                write!(f, "{}", block.label)?;
                if let (Some(start), Some(end)) = (block.start_hour, block.end_hour) {
                    write!(f, " ({} - {})", format_hour(start), format_hour(end))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cycle::{CycleBlock, ResolvedDayBlock, ShiftKind};
    use crate::timeline::{BlockKind, TimeBlock};

    #[test]
    fn time_block_renders_clock_range() {
        let block = TimeBlock::new(20.0, 20.5, "Commute home", BlockKind::Commute);
        assert_eq!(block.to_string(), "8 PM - 8:30 PM  Commute home [commute]");
    }

    #[test]
    fn resolved_block_renders_label_and_hours() {
        let day = ResolvedDayBlock::Rotation(CycleBlock::working(
            "Day Shift",
            ShiftKind::Day,
            4,
            8.0,
            20.0,
        ));
        assert_eq!(day.to_string(), "Day Shift (8 AM - 8 PM)");

        let off = ResolvedDayBlock::Rotation(CycleBlock::off(1));
        assert_eq!(off.to_string(), "Off");

        assert_eq!(
            ResolvedDayBlock::Undetermined.to_string(),
            "Off (before cycle start)"
        );
    }
}
