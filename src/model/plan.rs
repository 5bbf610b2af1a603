use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SeatingMode {
    /// Sequential roll order, one student per desk.
    OnePerDesk,
    /// Subject-diverse pairing, two students per desk.
    TwoPerDesk,
}

impl SeatingMode {
    pub fn seats_per_desk(self) -> u32 {
        match self {
            SeatingMode::OnePerDesk => 1,
            SeatingMode::TwoPerDesk => 2,
        }
    }
}

impl fmt::Display for SeatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeatingMode::OnePerDesk => "one_per_desk",
            SeatingMode::TwoPerDesk => "two_per_desk",
        })
    }
}

/// One desk of a room grid. Students are referenced by roll number; an
/// empty side stays `None`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeskAssignment {
    pub desk_number: u32,
    pub row: u32,
    pub col: u32,
    pub left_student: Option<String>,
    pub right_student: Option<String>,
}

impl DeskAssignment {
    pub fn occupants(&self) -> u32 {
        u32::from(self.left_student.is_some()) + u32::from(self.right_student.is_some())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeatingPlan {
    pub id: String,
    pub exam_id: String,
    pub room_id: String,
    pub seating_mode: SeatingMode,
    pub desk_assignments: Vec<DeskAssignment>,
    pub total_students: u32,
}

/// The outcome of one generation run, built fresh on every request.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerationResult {
    pub total_eligible_students: u32,
    pub total_students_assigned: u32,
    /// Desks forced to pair two students of the same subject group.
    pub adjacency_violations: u32,
    pub plans: Vec<SeatingPlan>,
}

impl GenerationResult {
    pub fn shortfall(&self) -> u32 {
        self.total_eligible_students - self.total_students_assigned
    }
}
