use crate::model::{GenerationResult, Room};
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::path::Path;

/// One CSV line per desk, empty desks included, with rows and columns
/// shifted to 1-based for the people laying out the room.
#[derive(Serialize)]
struct DeskRecord<'a> {
    room: &'a str,
    desk_number: u32,
    row: u32,
    col: u32,
    left_student: &'a str,
    right_student: &'a str,
}

pub fn export_csv(path: &Path, result: &GenerationResult, rooms: &[Room]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).wrap_err("cannot create export file")?;
    for (plan, room) in result.plans.iter().zip(rooms) {
        for desk in &plan.desk_assignments {
            writer
                .serialize(DeskRecord {
                    room: &room.name,
                    desk_number: desk.desk_number,
                    row: desk.row + 1,
                    col: desk.col + 1,
                    left_student: desk.left_student.as_deref().unwrap_or(""),
                    right_student: desk.right_student.as_deref().unwrap_or(""),
                })
                .wrap_err("cannot write export record")?;
        }
    }
    writer.flush().wrap_err("cannot flush export file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::engine::tests::{exam, room, student};
    use crate::model::SeatingMode;

    #[test]
    fn export_writes_one_line_per_desk() {
        let population = vec![
            student("M1", "CS", &["Math"]),
            student("P1", "CS", &["Physics"]),
        ];
        let rooms = [room("r1", 2, 1, 2, 100)];
        let result = engine::generate(
            &exam(&[], &["Math", "Physics"]),
            &rooms,
            &population,
            SeatingMode::TwoPerDesk,
        )
        .unwrap();
        let dir = std::env::temp_dir().join("autoseater-export-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plans.csv");
        export_csv(&path, &result, &rooms).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        // header + two desks, the second one empty
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("room,desk_number,row,col"));
        assert!(lines[1].contains("M1"));
        assert!(lines[1].contains("P1"));
        assert!(lines[2].ends_with(",,"));
    }
}
