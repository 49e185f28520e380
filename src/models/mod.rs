//! Timetabling domain models.
//!
//! Core data types for weekly academic timetabling: the time grid
//! primitives, the entity snapshots the generator consumes, and the
//! timetable it produces.
//!
//! # Entity Graph
//!
//! | Type | References |
//! |------|-----------|
//! | Section | subjects (by id) |
//! | Subject | assigned teacher (by id) |
//! | TimetableEntry | section, subject, teacher, room (by id) |

mod constraint;
mod entity;
mod slot;
mod timetable;

pub use constraint::{BreakTime, ConstraintType, SchedulingPreferences, TimetableConstraint};
pub use entity::{Room, RoomType, Section, Subject, Teacher};
pub use slot::{Day, TimeOfDay, TimeOfDayParseError, TimeSlot};
pub use timetable::{GeneratedTimetable, TimetableEntry};
