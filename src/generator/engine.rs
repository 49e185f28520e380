//! Greedy slot assignment engine.
//!
//! # Algorithm
//!
//! 1. Filter the canonical grid by preferences and breaks.
//! 2. For each section (input order), for each subject the section
//!    takes (subject-list input order): scan the filtered slots and
//!    place one hour wherever every check passes, until the weekly
//!    target is met or slots run out.
//! 3. Run the constraint validator over the finished entry set.
//!
//! No backtracking: an hour that cannot be placed becomes a shortfall
//! constraint, and earlier placements are never revisited. The scan
//! order and the per-slot check order both determine which hours get
//! dropped under contention, so neither may be reordered.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::grid;
use crate::models::{
    BreakTime, Day, GeneratedTimetable, Room, SchedulingPreferences, Section, Subject, Teacher,
    TimeOfDay, TimeSlot, TimetableConstraint, TimetableEntry,
};
use crate::validation;

use super::rooms;

/// Greedy timetable generator over immutable input snapshots.
///
/// One instance borrows one set of inputs; [`generate`](Self::generate)
/// runs the whole pass synchronously and returns a fresh timetable.
/// Repeated calls on identical inputs produce identical entries and
/// constraints, ids aside.
///
/// # Example
///
/// ```
/// use timetabler::generator::TimetableGenerator;
/// use timetabler::models::{
///     Room, RoomType, SchedulingPreferences, Section, Subject, Teacher,
/// };
///
/// let teachers = vec![Teacher::new("t1", "Dr. Rao")];
/// let subjects = vec![Subject::new("s1", "Maths").with_hours(3).with_teacher("t1")];
/// let rooms = vec![Room::new("r1", "Room 101", RoomType::Classroom).with_capacity(40)];
/// let sections = vec![Section::new("sec1", "CS-A").with_students(35).with_subject("s1")];
/// let preferences = SchedulingPreferences::default();
///
/// let generator =
///     TimetableGenerator::new(&teachers, &subjects, &rooms, &sections, &[], &preferences);
/// let timetable = generator.generate();
/// assert_eq!(timetable.entry_count(), 3);
/// assert!(timetable.is_conflict_free());
/// ```
#[derive(Debug)]
pub struct TimetableGenerator<'a> {
    teachers: &'a [Teacher],
    subjects: &'a [Subject],
    rooms: &'a [Room],
    sections: &'a [Section],
    breaks: &'a [BreakTime],
    preferences: &'a SchedulingPreferences,
}

impl<'a> TimetableGenerator<'a> {
    /// Creates a generator over the given input snapshots.
    pub fn new(
        teachers: &'a [Teacher],
        subjects: &'a [Subject],
        rooms: &'a [Room],
        sections: &'a [Section],
        breaks: &'a [BreakTime],
        preferences: &'a SchedulingPreferences,
    ) -> Self {
        Self {
            teachers,
            subjects,
            rooms,
            sections,
            breaks,
            preferences,
        }
    }

    /// Runs the full greedy pass and the validation post-pass.
    pub fn generate(&self) -> GeneratedTimetable {
        let slots = grid::available_slots(self.preferences, self.breaks);
        debug!(
            "filtered weekly grid to {}/{} usable slots",
            slots.len(),
            grid::GRID_SIZE
        );

        let mut entries: Vec<TimetableEntry> = Vec::new();
        let mut constraints: Vec<TimetableConstraint> = Vec::new();

        for section in self.sections {
            self.schedule_section(section, &slots, &mut entries, &mut constraints);
        }

        constraints.extend(validation::validate(&entries, self.teachers));
        let conflicts = constraints.iter().filter(|c| c.is_hard_violation()).count();

        info!(
            "generated timetable: {} entries, {} constraint records, {} conflicts",
            entries.len(),
            constraints.len(),
            conflicts
        );

        let now = Utc::now();
        GeneratedTimetable {
            id: Uuid::new_v4().to_string(),
            name: format!("Timetable {}", now.format("%Y-%m-%d")),
            department_id: self
                .sections
                .first()
                .map(|s| s.department_id.clone())
                .unwrap_or_default(),
            entries,
            constraints,
            generated_at: now,
            conflicts,
        }
    }

    /// Schedules every subject a section takes.
    ///
    /// Subjects are visited in the subject-list's input order, filtered
    /// to the section's membership — this order is part of the contract.
    fn schedule_section(
        &self,
        section: &Section,
        slots: &[TimeSlot],
        entries: &mut Vec<TimetableEntry>,
        constraints: &mut Vec<TimetableConstraint>,
    ) {
        let section_subjects = self
            .subjects
            .iter()
            .filter(|s| section.subjects.contains(&s.id));

        for subject in section_subjects {
            let teacher = subject
                .assigned_teacher_id
                .as_deref()
                .and_then(|tid| self.teachers.iter().find(|t| t.id == tid));

            let Some(teacher) = teacher else {
                constraints.push(TimetableConstraint::hard(
                    format!(
                        "No teacher assigned to {} for {}",
                        subject.name, section.name
                    ),
                    true,
                ));
                continue;
            };

            let required = subject.hours_per_week;
            let mut scheduled = 0u32;
            let mut last_scheduled_day: Option<Day> = None;

            for slot in slots {
                if scheduled >= required {
                    break;
                }

                if !teacher.is_available(slot) {
                    continue;
                }
                if entries
                    .iter()
                    .any(|e| e.teacher_id == teacher.id && e.slot == *slot)
                {
                    continue;
                }
                if entries
                    .iter()
                    .any(|e| e.section_id == section.id && e.slot == *slot)
                {
                    continue;
                }
                if consecutive_run_before(entries, &section.id, slot)
                    >= self.preferences.max_consecutive_hours
                {
                    continue;
                }
                if self.preferences.avoid_back_to_back_same_subject
                    && last_scheduled_day == Some(slot.day)
                    && last_start_on_day(entries, &section.id, slot.day)
                        .is_some_and(|t| t.is_consecutive_with(slot.start))
                {
                    continue;
                }

                let Some(room) = rooms::find_available_room(
                    self.rooms,
                    subject,
                    slot,
                    section.student_count,
                    entries,
                ) else {
                    continue;
                };

                entries.push(TimetableEntry::new(
                    &section.id,
                    &subject.id,
                    &teacher.id,
                    &room.id,
                    slot.clone(),
                ));
                scheduled += 1;
                last_scheduled_day = Some(slot.day);
            }

            if scheduled < required {
                debug!(
                    "shortfall: {}/{} hours for {} in {}",
                    scheduled, required, subject.name, section.name
                );
                constraints.push(TimetableConstraint::soft_violated(format!(
                    "Only scheduled {}/{} hours for {} in {}",
                    scheduled, required, subject.name, section.name
                )));
            }
        }
    }
}

/// Length of the run of hours immediately preceding `slot` for a section.
///
/// Walks the section's same-day entries backwards from the candidate,
/// each link exactly 60 minutes before the previous one. A lunch or
/// break gap stops the walk because the minute difference exceeds 60.
fn consecutive_run_before(entries: &[TimetableEntry], section_id: &str, slot: &TimeSlot) -> u32 {
    let mut starts: Vec<TimeOfDay> = entries
        .iter()
        .filter(|e| e.section_id == section_id && e.slot.day == slot.day)
        .map(|e| e.slot.start)
        .collect();
    starts.sort_unstable();

    let mut run = 0;
    let mut cursor = slot.start;
    for &start in starts.iter().rev() {
        if cursor.minutes().saturating_sub(start.minutes()) == 60 {
            run += 1;
            cursor = start;
        } else {
            break;
        }
    }
    run
}

/// Latest start among a section's entries on one day.
fn last_start_on_day(entries: &[TimetableEntry], section_id: &str, day: Day) -> Option<TimeOfDay> {
    entries
        .iter()
        .filter(|e| e.section_id == section_id && e.slot.day == day)
        .map(|e| e.slot.start)
        .max()
}

/// Generates a timetable from input snapshots.
///
/// Convenience wrapper over [`TimetableGenerator`].
pub fn generate(
    teachers: &[Teacher],
    subjects: &[Subject],
    rooms: &[Room],
    sections: &[Section],
    breaks: &[BreakTime],
    preferences: &SchedulingPreferences,
) -> GeneratedTimetable {
    TimetableGenerator::new(teachers, subjects, rooms, sections, breaks, preferences).generate()
}
