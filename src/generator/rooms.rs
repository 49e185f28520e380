//! First-fit room selection.
//!
//! Rooms are tried in input-list order and the first one that fits is
//! taken. No best-fit: a 200-seat auditorium listed first will host a
//! 20-student class if it is free.

use crate::models::{Room, RoomType, Subject, TimeSlot, TimetableEntry};

/// Finds a free room for a class at the given slot.
///
/// A room fits iff it is a lab when the subject requires one, seats at
/// least `student_count`, and no existing entry occupies it at the
/// slot's (day, start).
pub fn find_available_room<'a>(
    rooms: &'a [Room],
    subject: &Subject,
    slot: &TimeSlot,
    student_count: u32,
    entries: &[TimetableEntry],
) -> Option<&'a Room> {
    rooms.iter().find(|room| {
        if subject.requires_lab && room.room_type != RoomType::Lab {
            return false;
        }
        if room.capacity < student_count {
            return false;
        }
        !entries
            .iter()
            .any(|e| e.room_id == room.id && e.slot == *slot)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, TimeOfDay};

    fn slot(day: Day, hour: u16) -> TimeSlot {
        TimeSlot::new(day, TimeOfDay::hm(hour, 0), TimeOfDay::hm(hour + 1, 0))
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("r1", "Room 101", RoomType::Classroom).with_capacity(40),
            Room::new("r2", "Room 102", RoomType::Classroom).with_capacity(60),
            Room::new("l1", "Physics Lab", RoomType::Lab).with_capacity(30),
        ]
    }

    #[test]
    fn test_first_fit_in_input_order() {
        let rooms = sample_rooms();
        let subject = Subject::new("s1", "Maths");
        let room =
            find_available_room(&rooms, &subject, &slot(Day::Monday, 9), 35, &[]).unwrap();
        assert_eq!(room.id, "r1");
    }

    #[test]
    fn test_capacity_skips_small_rooms() {
        let rooms = sample_rooms();
        let subject = Subject::new("s1", "Maths");
        let room =
            find_available_room(&rooms, &subject, &slot(Day::Monday, 9), 50, &[]).unwrap();
        assert_eq!(room.id, "r2");
    }

    #[test]
    fn test_lab_requirement() {
        let rooms = sample_rooms();
        let subject = Subject::new("s1", "Physics Lab").with_lab();
        let room =
            find_available_room(&rooms, &subject, &slot(Day::Monday, 9), 25, &[]).unwrap();
        assert_eq!(room.id, "l1");

        // Lab too small → nothing fits
        assert!(find_available_room(&rooms, &subject, &slot(Day::Monday, 9), 35, &[]).is_none());
    }

    #[test]
    fn test_occupied_room_is_skipped() {
        let rooms = sample_rooms();
        let subject = Subject::new("s1", "Maths");
        let taken = slot(Day::Monday, 9);
        let entries = vec![TimetableEntry::new("sec1", "s9", "t9", "r1", taken.clone())];

        let room = find_available_room(&rooms, &subject, &taken, 35, &entries).unwrap();
        assert_eq!(room.id, "r2");

        // Same room is free at a different hour
        let later = slot(Day::Monday, 10);
        let room = find_available_room(&rooms, &subject, &later, 35, &entries).unwrap();
        assert_eq!(room.id, "r1");
    }

    #[test]
    fn test_no_rooms_at_all() {
        let subject = Subject::new("s1", "Maths");
        assert!(find_available_room(&[], &subject, &slot(Day::Monday, 9), 10, &[]).is_none());
    }
}
