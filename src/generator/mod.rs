//! Greedy timetable generation.
//!
//! Provides the slot assignment engine and the first-fit room selector.
//! The engine runs a single deterministic forward pass over the
//! filtered weekly grid — a constructive heuristic, not a solver:
//! there is no backtracking, no objective function, and no randomness
//! beyond entry id generation. Hours that cannot be placed degrade
//! into soft constraint records instead of errors.
//!
//! # Usage
//!
//! ```no_run
//! use timetabler::generator;
//! use timetabler::models::SchedulingPreferences;
//!
//! # let (teachers, subjects, rooms, sections, breaks) =
//! #     (vec![], vec![], vec![], vec![], vec![]);
//! let preferences = SchedulingPreferences::default();
//! let timetable =
//!     generator::generate(&teachers, &subjects, &rooms, &sections, &breaks, &preferences);
//! println!("{} meetings, {} conflicts", timetable.entry_count(), timetable.conflicts);
//! ```

mod engine;
pub mod rooms;

pub use engine::{generate, TimetableGenerator};
