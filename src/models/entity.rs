//! Entity models: teachers, subjects, rooms, and sections.
//!
//! These are the input snapshots the generator consumes. The generator
//! never mutates them; cross-references (section → subject, subject →
//! teacher) are by id.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A teacher who can be assigned to subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    pub department_id: String,
    /// Availability windows. Empty = available at any slot.
    pub availability: Vec<TimeSlot>,
    /// Weekly teaching hour cap (soft constraint).
    pub max_hours_per_week: u32,
}

impl Teacher {
    /// Creates a teacher with no availability restriction and a 40-hour cap.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department_id: String::new(),
            availability: Vec::new(),
            max_hours_per_week: 40,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = department_id.into();
        self
    }

    /// Adds an availability window.
    pub fn with_availability(mut self, window: TimeSlot) -> Self {
        self.availability.push(window);
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours(mut self, max_hours_per_week: u32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Whether this teacher can take a class at the given slot.
    ///
    /// A teacher with no declared windows is always available; otherwise
    /// the slot must fall entirely inside a window on the same day.
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        if self.availability.is_empty() {
            return true;
        }
        self.availability
            .iter()
            .any(|w| w.day == slot.day && w.start <= slot.start && w.end >= slot.end)
    }
}

/// A subject taught to one or more sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    pub department_id: String,
    /// Number of one-hour meetings to schedule per week.
    pub hours_per_week: u32,
    /// Whether meetings must be held in a lab room.
    pub requires_lab: bool,
    /// Assigned teacher. `None` is a hard-constraint failure at
    /// generation time, not a structural error.
    pub assigned_teacher_id: Option<String>,
}

impl Subject {
    /// Creates a subject with one weekly hour and no teacher.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department_id: String::new(),
            hours_per_week: 1,
            requires_lab: false,
            assigned_teacher_id: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = department_id.into();
        self
    }

    /// Sets the weekly hour target.
    pub fn with_hours(mut self, hours_per_week: u32) -> Self {
        self.hours_per_week = hours_per_week;
        self
    }

    /// Marks the subject as requiring a lab room.
    pub fn with_lab(mut self) -> Self {
        self.requires_lab = true;
        self
    }

    /// Assigns a teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.assigned_teacher_id = Some(teacher_id.into());
        self
    }
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// General-purpose teaching room.
    Classroom,
    /// Laboratory; required by lab subjects.
    Lab,
    /// Large-capacity hall.
    Auditorium,
}

/// A room where classes take place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Seating capacity.
    pub capacity: u32,
    /// Owning department, if dedicated.
    pub department_id: Option<String>,
}

impl Room {
    /// Creates a room with a default capacity of 30.
    pub fn new(id: impl Into<String>, name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            capacity: 30,
            department_id: None,
        }
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Dedicates the room to a department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }
}

/// A student cohort taking a fixed set of subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    pub department_id: String,
    /// Semester number.
    pub semester: u32,
    /// Cohort size; rooms must seat at least this many.
    pub student_count: u32,
    /// Subjects this cohort takes, by id.
    pub subjects: Vec<String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department_id: String::new(),
            semester: 1,
            student_count: 0,
            subjects: Vec::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = department_id.into();
        self
    }

    /// Sets the semester number.
    pub fn with_semester(mut self, semester: u32) -> Self {
        self.semester = semester;
        self
    }

    /// Sets the cohort size.
    pub fn with_students(mut self, student_count: u32) -> Self {
        self.student_count = student_count;
        self
    }

    /// Adds a subject by id.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }
}
