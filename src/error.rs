use std::fmt;

/// Errors produced while loading or validating a plan document.
///
/// The planner operations themselves (resolution, timeline construction,
/// gap analysis, suggestion) have no failure path; bad input degrades to
/// sentinels or omitted blocks instead.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum PlanError {
    /// The plan JSON could not be parsed.
    Json { message: String },

    /// A date field could not be parsed.
    Date { message: String },

    /// The rotation is degenerate (empty or zero total length).
    Cycle { message: String },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { message } => write!(f, "invalid plan: {message}"),
            Self::Date { message } => write!(f, "invalid date: {message}"),
            Self::Cycle { message } => write!(f, "invalid cycle: {message}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl PlanError {
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    pub fn date(message: impl Into<String>) -> Self {
        Self::Date {
            message: message.into(),
        }
    }

    pub fn cycle(message: impl Into<String>) -> Self {
        Self::Cycle {
            message: message.into(),
        }
    }
}
