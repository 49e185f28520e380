//! Academic timetable generation.
//!
//! Assigns weekly class meetings (subject × section) to time slots,
//! teachers, and rooms with a single deterministic greedy pass over a
//! fixed weekly grid, then validates the result. Double-bookings are
//! hard constraints; workload caps, break avoidance, and
//! consecutive-hour limits are soft preferences that degrade into
//! constraint records rather than errors.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Teacher`, `Subject`,
//!   `Room`, `Section`, `BreakTime`, `SchedulingPreferences`,
//!   `GeneratedTimetable`
//! - **`grid`**: The canonical 35-slot weekly grid and the
//!   preference-driven availability filter
//! - **`generator`**: The greedy slot assignment engine and first-fit
//!   room selector
//! - **`validation`**: Post-pass double-booking, workload, and
//!   availability checks
//!
//! # Architecture
//!
//! The crate is a library invoked from an interactive "Generate"
//! action: inputs arrive as immutable snapshots, one call runs to
//! completion synchronously, and the caller inspects `conflicts` and
//! `constraints` on the returned timetable to accept, warn, or discard.
//! Persistence, authentication, and rendering live with the caller.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod generator;
pub mod grid;
pub mod models;
pub mod validation;
