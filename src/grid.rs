//! Canonical weekly grid and the preference-driven availability filter.
//!
//! The grid is fixed: Monday through Friday, one-hour slots from 09:00
//! to 17:00 with the 13:00-14:00 hour left out. 7 slots × 5 days = 35
//! canonical slots, day-major then time-ascending. The midday gap is
//! part of the grid itself; the configurable lunch window in
//! [`SchedulingPreferences`] filters on top of it.
//!
//! The filter's output keeps the grid's ordering. That ordering is the
//! greedy scan order, so earlier days and times fill first.

use crate::models::{BreakTime, Day, SchedulingPreferences, TimeOfDay, TimeSlot};

/// Slot start hours of one grid day. 13:00 is missing on purpose.
const START_HOURS: [u16; 7] = [9, 10, 11, 12, 14, 15, 16];

/// Number of slots per grid day.
pub const SLOTS_PER_DAY: usize = START_HOURS.len();

/// Total number of canonical slots in the weekly grid.
pub const GRID_SIZE: usize = SLOTS_PER_DAY * Day::WEEKDAYS.len();

/// Builds the canonical weekly slot catalogue.
///
/// Independent of any preferences: the same 35 slots on every call,
/// day-major then time-ascending.
pub fn weekly_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(GRID_SIZE);
    for day in Day::WEEKDAYS {
        for hour in START_HOURS {
            slots.push(TimeSlot::new(
                day,
                TimeOfDay::hm(hour, 0),
                TimeOfDay::hm(hour + 1, 0),
            ));
        }
    }
    slots
}

/// Narrows the canonical grid to the slots usable for scheduling.
///
/// A slot survives iff:
/// 1. its start lies within the preferred working window
///    (`preferred_start_time ≤ start < preferred_end_time`);
/// 2. the lunch window, when required, does not cover its start;
/// 3. no [`BreakTime`] on the same day covers its start.
pub fn available_slots(
    preferences: &SchedulingPreferences,
    breaks: &[BreakTime],
) -> Vec<TimeSlot> {
    weekly_slots()
        .into_iter()
        .filter(|slot| {
            if slot.start < preferences.preferred_start_time
                || slot.start >= preferences.preferred_end_time
            {
                return false;
            }

            if preferences.lunch_break_required
                && slot.start >= preferences.lunch_break_start
                && slot.start < preferences.lunch_break_end
            {
                return false;
            }

            !breaks.iter().any(|b| b.covers(slot.day, slot.start))
        })
        .collect()
}
