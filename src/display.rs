use crate::model::{GenerationResult, Room, SeatingMode};

pub fn display_details(result: &GenerationResult, rooms: &[Room]) {
    for (plan, room) in result.plans.iter().zip(rooms) {
        if plan.total_students == 0 {
            continue;
        }
        println!("{}:", room.name);
        for desk in &plan.desk_assignments {
            if desk.occupants() == 0 {
                continue;
            }
            let left = desk.left_student.as_deref().unwrap_or("-");
            match plan.seating_mode {
                SeatingMode::OnePerDesk => println!(
                    "  - desk {} (row {}, col {}): {}",
                    desk.desk_number,
                    desk.row + 1,
                    desk.col + 1,
                    left
                ),
                SeatingMode::TwoPerDesk => println!(
                    "  - desk {} (row {}, col {}): {} / {}",
                    desk.desk_number,
                    desk.row + 1,
                    desk.col + 1,
                    left,
                    desk.right_student.as_deref().unwrap_or("-")
                ),
            }
        }
        println!();
    }
}

pub fn display_totals(result: &GenerationResult, rooms: &[Room]) {
    println!(
        "Students assigned/eligible: {}/{}",
        result.total_students_assigned, result.total_eligible_students
    );
    if result.shortfall() > 0 {
        println!("Unassigned students: {}", result.shortfall());
    }
    if result.adjacency_violations > 0 {
        println!(
            "Desks with same-subject pairs: {}",
            result.adjacency_violations
        );
    }
    display_empty(result, rooms);
}

fn display_empty(result: &GenerationResult, rooms: &[Room]) {
    let empty = result
        .plans
        .iter()
        .zip(rooms)
        .filter(|(plan, _)| plan.total_students == 0)
        .map(|(_, room)| room)
        .collect::<Vec<_>>();
    if !empty.is_empty() {
        println!("Empty rooms:");
        for room in empty {
            println!("  - {}", room.name);
        }
    }
}
