use crate::model::{Exam, GenerationResult, Room, SeatingMode, SeatingPlan, Student};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

mod eligibility;
mod fill;
mod groups;
mod interleave;

/// Fatal request errors: nothing is generated or persisted.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("no rooms selected")]
    NoRoomsSelected,
    #[error("exam {0} has neither departments nor subjects configured")]
    NoEligibilityCriteria(String),
}

/// Generate seating plans for an exam over the given rooms, in room
/// order. Pure function of its inputs: identical snapshots produce an
/// identical desk-to-student mapping. Capacity shortfalls and forced
/// same-subject pairings are reported on the result, not raised.
pub fn generate(
    exam: &Exam,
    rooms: &[Room],
    population: &[Student],
    mode: SeatingMode,
) -> Result<GenerationResult, ValidationError> {
    if rooms.is_empty() {
        return Err(ValidationError::NoRoomsSelected);
    }
    let eligible = eligibility::eligible_students(population, exam)?;
    let total_eligible_students = eligible.len() as u32;
    info!(
        exam = %exam.name,
        eligible = total_eligible_students,
        rooms = rooms.len(),
        mode = %mode,
        "generating seating plans"
    );
    let (ordering, group_of) = match mode {
        // Already roll-sorted, which is the whole contract here.
        SeatingMode::OnePerDesk => (eligible, HashMap::new()),
        SeatingMode::TwoPerDesk => {
            let groups = groups::subject_groups(eligible, exam);
            debug!(groups = groups.len(), "subject groups formed");
            let group_of = groups::group_index(&groups);
            (interleave::interleave(groups), group_of)
        }
    };
    let fills = fill::fill_rooms(&ordering, rooms, mode);
    let mut total_students_assigned = 0;
    let mut adjacency_violations = 0;
    let mut plans = Vec::with_capacity(rooms.len());
    for (room, fill) in rooms.iter().zip(fills) {
        adjacency_violations += fill
            .desks
            .iter()
            .filter(|desk| {
                match (&desk.left_student, &desk.right_student) {
                    (Some(left), Some(right)) => group_of.get(left) == group_of.get(right),
                    _ => false,
                }
            })
            .count() as u32;
        total_students_assigned += fill.seated;
        plans.push(SeatingPlan {
            id: Uuid::new_v4().to_string(),
            exam_id: exam.id.clone(),
            room_id: room.id.clone(),
            seating_mode: mode,
            desk_assignments: fill.desks,
            total_students: fill.seated,
        });
    }
    Ok(GenerationResult {
        total_eligible_students,
        total_students_assigned,
        adjacency_violations,
        plans,
    })
}
