use crate::model::{DeskAssignment, Room, SeatingMode, Student};
use tracing::debug;

/// Desk assignments for one room, before being wrapped into a plan.
#[derive(Debug)]
pub struct RoomFill {
    pub desks: Vec<DeskAssignment>,
    pub seated: u32,
}

/// Map an ordered student sequence onto the desk grids of the given
/// rooms, strictly in the given order. Each room consumes as much of
/// the remaining ordering as it can seat; there is no redistribution
/// to balance occupancy. A room reached after the ordering is
/// exhausted still yields a fill with every desk empty.
pub fn fill_rooms(ordering: &[Student], rooms: &[Room], mode: SeatingMode) -> Vec<RoomFill> {
    let mut next = 0;
    rooms
        .iter()
        .map(|room| {
            let budget = (room.seats(mode) as usize).min(ordering.len() - next);
            let fill = fill_room(&ordering[next..next + budget], room, mode);
            debug!(
                room = %room.name,
                desks = room.usable_desks(),
                seated = fill.seated,
                "room filled"
            );
            next += budget;
            fill
        })
        .collect()
}

fn fill_room(students: &[Student], room: &Room, mode: SeatingMode) -> RoomFill {
    let per_desk = mode.seats_per_desk();
    let mut desks = Vec::with_capacity(room.usable_desks() as usize);
    let mut seated = 0;
    for desk_number in 0..room.usable_desks() {
        let (row, col) = room.desk_position(desk_number);
        let base = (desk_number * per_desk) as usize;
        let left_student = students.get(base).map(|s| s.roll_number.clone());
        let right_student = match mode {
            SeatingMode::TwoPerDesk => students.get(base + 1).map(|s| s.roll_number.clone()),
            SeatingMode::OnePerDesk => None,
        };
        let desk = DeskAssignment {
            desk_number,
            row,
            col,
            left_student,
            right_student,
        };
        seated += desk.occupants();
        desks.push(desk);
    }
    RoomFill { desks, seated }
}
