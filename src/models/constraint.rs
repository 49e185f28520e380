//! Scheduling preferences, break times, and constraint records.
//!
//! Two reporting styles deliberately coexist in the output: the three
//! double-booking categories are each one record with a shared
//! `violated` flag, while workload and availability issues are itemized
//! per occurrence. The timetable's `conflicts` count covers only
//! violated hard records, so consumers see 0-3 conflicts regardless of
//! how many individual pairs collide.

use serde::{Deserialize, Serialize};

use super::{Day, TimeOfDay};

/// Hard or soft constraint classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintType {
    /// Must hold; a violation makes the timetable unacceptable.
    Hard,
    /// Should hold; violations are reported but tolerated.
    Soft,
}

/// Outcome of a single constraint check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableConstraint {
    /// Hard or soft.
    pub constraint_type: ConstraintType,
    /// Human-readable description of the check or the violation.
    pub description: String,
    /// Whether the constraint was violated.
    pub violated: bool,
}

impl TimetableConstraint {
    /// Creates a hard constraint record with the given outcome.
    pub fn hard(description: impl Into<String>, violated: bool) -> Self {
        Self {
            constraint_type: ConstraintType::Hard,
            description: description.into(),
            violated,
        }
    }

    /// Creates a violated soft constraint record.
    pub fn soft_violated(description: impl Into<String>) -> Self {
        Self {
            constraint_type: ConstraintType::Soft,
            description: description.into(),
            violated: true,
        }
    }

    /// Whether this is a violated hard constraint.
    #[inline]
    pub fn is_hard_violation(&self) -> bool {
        self.constraint_type == ConstraintType::Hard && self.violated
    }
}

/// A recurring blocked interval (assembly, department meeting, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakTime {
    /// Unique break identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Day the break recurs on.
    pub day: Day,
    /// Break start.
    pub start: TimeOfDay,
    /// Break end.
    pub end: TimeOfDay,
}

impl BreakTime {
    /// Creates a new break time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        day: Day,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            day,
            start,
            end,
        }
    }

    /// Whether a slot starting at `start` on `day` falls inside this break.
    pub fn covers(&self, day: Day, start: TimeOfDay) -> bool {
        self.day == day && self.start <= start && start < self.end
    }
}

/// Knobs that shape the availability filter and placement rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingPreferences {
    /// Minimum gap between classes in minutes. Present in the data model
    /// but not consulted by the placement rules.
    pub min_gap_between_classes: u32,
    /// Longest allowed run of back-to-back hours for a section.
    pub max_consecutive_hours: u32,
    /// Whether the lunch window blocks scheduling.
    pub lunch_break_required: bool,
    /// Lunch window start.
    pub lunch_break_start: TimeOfDay,
    /// Lunch window end.
    pub lunch_break_end: TimeOfDay,
    /// Reject a slot when the same subject occupied the immediately
    /// preceding hour for the same section.
    pub avoid_back_to_back_same_subject: bool,
    /// Earliest slot start to consider.
    pub preferred_start_time: TimeOfDay,
    /// Slot starts at or after this time are excluded.
    pub preferred_end_time: TimeOfDay,
}

impl Default for SchedulingPreferences {
    /// Full working day, lunch blocked, four consecutive hours allowed.
    fn default() -> Self {
        Self {
            min_gap_between_classes: 0,
            max_consecutive_hours: 4,
            lunch_break_required: true,
            lunch_break_start: TimeOfDay::hm(13, 0),
            lunch_break_end: TimeOfDay::hm(14, 0),
            avoid_back_to_back_same_subject: false,
            preferred_start_time: TimeOfDay::hm(9, 0),
            preferred_end_time: TimeOfDay::hm(17, 0),
        }
    }
}

impl SchedulingPreferences {
    /// Sets the consecutive-hours cap.
    pub fn with_max_consecutive(mut self, hours: u32) -> Self {
        self.max_consecutive_hours = hours;
        self
    }

    /// Enables back-to-back same-subject avoidance.
    pub fn avoiding_back_to_back(mut self) -> Self {
        self.avoid_back_to_back_same_subject = true;
        self
    }

    /// Sets the preferred working window.
    pub fn with_working_hours(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.preferred_start_time = start;
        self.preferred_end_time = end;
        self
    }

    /// Disables the lunch window.
    pub fn without_lunch_break(mut self) -> Self {
        self.lunch_break_required = false;
        self
    }
}
