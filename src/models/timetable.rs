//! Timetable (solution) model.
//!
//! A generated timetable is a complete assignment of weekly class
//! meetings to slots, teachers, and rooms, together with the outcome of
//! every constraint check. Downstream views (per-section, per-teacher,
//! per-room tables and exports) only need read access to the entries
//! and cross-reference the entity lists by id.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TimeSlot, TimetableConstraint};

/// One scheduled weekly class meeting.
///
/// Immutable once produced by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Section attending the class.
    pub section_id: String,
    /// Subject being taught.
    pub subject_id: String,
    /// Teacher giving the class.
    pub teacher_id: String,
    /// Room hosting the class.
    pub room_id: String,
    /// When the class takes place.
    pub slot: TimeSlot,
}

impl TimetableEntry {
    /// Creates an entry with a fresh UUID.
    pub fn new(
        section_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            section_id: section_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
            slot,
        }
    }
}

/// A complete generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTimetable {
    /// Unique timetable identifier.
    pub id: String,
    /// Display name, defaults to `"Timetable {date}"`.
    pub name: String,
    /// Department of the first section, empty when no sections were given.
    pub department_id: String,
    /// All scheduled meetings.
    pub entries: Vec<TimetableEntry>,
    /// Outcome of every constraint check, hard and soft.
    pub constraints: Vec<TimetableConstraint>,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Count of violated hard constraints (0-3).
    pub conflicts: usize,
}

impl GeneratedTimetable {
    /// Whether no hard constraint was violated.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts == 0
    }

    /// Number of scheduled meetings.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries for a section, in placement order.
    pub fn entries_for_section(&self, section_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.section_id == section_id)
            .collect()
    }

    /// All entries taught by a teacher.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// All entries held in a room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_id == room_id)
            .collect()
    }

    /// Assigned weekly hours per teacher. Each entry is one hour.
    pub fn teacher_hours(&self) -> HashMap<String, u32> {
        let mut hours: HashMap<String, u32> = HashMap::new();
        for e in &self.entries {
            *hours.entry(e.teacher_id.clone()).or_insert(0) += 1;
        }
        hours
    }

    /// Constraint records that were violated, hard and soft.
    pub fn violated_constraints(&self) -> Vec<&TimetableConstraint> {
        self.constraints.iter().filter(|c| c.violated).collect()
    }
}
