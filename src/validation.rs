//! Post-pass constraint validation.
//!
//! Scans a finished entry set and produces constraint records:
//! - Hard: teacher, room, and section double-booking — one record per
//!   category with a single shared `violated` flag. The engine's
//!   placement rules make all three structurally impossible to violate,
//!   so a fired flag signals an implementation bug, not a scheduling
//!   problem.
//! - Soft: per-teacher workload overages and per-entry availability
//!   mismatches, itemized per occurrence. The availability recheck
//!   duplicates the engine's own filter on purpose.

use std::collections::{HashMap, HashSet};

use crate::models::{Day, Teacher, TimeOfDay, TimetableConstraint, TimetableEntry};

/// Runs every post-pass check over the finished entry set.
///
/// Always returns at least the three hard double-booking records, in
/// teacher/room/section order, followed by any itemized soft records.
pub fn validate(entries: &[TimetableEntry], teachers: &[Teacher]) -> Vec<TimetableConstraint> {
    let mut constraints = vec![
        TimetableConstraint::hard(
            "No teacher double-booking",
            has_double_booking(entries, |e| e.teacher_id.as_str()),
        ),
        TimetableConstraint::hard(
            "No room double-booking",
            has_double_booking(entries, |e| e.room_id.as_str()),
        ),
        TimetableConstraint::hard(
            "No section double-booking",
            has_double_booking(entries, |e| e.section_id.as_str()),
        ),
    ];

    check_teacher_workload(entries, teachers, &mut constraints);
    check_availability(entries, teachers, &mut constraints);

    constraints
}

/// Whether any resource occupies two entries at the same (day, start).
///
/// `key` projects the resource id out of an entry; one seen-key set is
/// tracked per resource.
fn has_double_booking<F>(entries: &[TimetableEntry], key: F) -> bool
where
    F: Fn(&TimetableEntry) -> &str,
{
    let mut seen: HashMap<&str, HashSet<(Day, TimeOfDay)>> = HashMap::new();
    for entry in entries {
        let slots = seen.entry(key(entry)).or_default();
        if !slots.insert((entry.slot.day, entry.slot.start)) {
            return true;
        }
    }
    false
}

/// Emits one violated soft record per teacher over their weekly cap.
fn check_teacher_workload(
    entries: &[TimetableEntry],
    teachers: &[Teacher],
    constraints: &mut Vec<TimetableConstraint>,
) {
    let mut hours: HashMap<&str, u32> = HashMap::new();
    for entry in entries {
        *hours.entry(entry.teacher_id.as_str()).or_insert(0) += 1;
    }

    for teacher in teachers {
        let assigned = hours.get(teacher.id.as_str()).copied().unwrap_or(0);
        if assigned > teacher.max_hours_per_week {
            constraints.push(TimetableConstraint::soft_violated(format!(
                "{} exceeds maximum hours: {}/{}",
                teacher.name, assigned, teacher.max_hours_per_week
            )));
        }
    }
}

/// Emits one violated soft record per entry scheduled outside the
/// teacher's declared availability.
fn check_availability(
    entries: &[TimetableEntry],
    teachers: &[Teacher],
    constraints: &mut Vec<TimetableConstraint>,
) {
    for entry in entries {
        let Some(teacher) = teachers.iter().find(|t| t.id == entry.teacher_id) else {
            continue;
        };
        if !teacher.is_available(&entry.slot) {
            constraints.push(TimetableConstraint::soft_violated(format!(
                "{} scheduled outside availability on {} at {}",
                teacher.name, entry.slot.day, entry.slot.start
            )));
        }
    }
}
