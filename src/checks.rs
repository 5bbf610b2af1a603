use crate::model::GenerationResult;
use eyre::{Result, ensure};
use std::collections::HashSet;
use tracing::warn;

/// Non-fatal: the plans stand, the caller surfaces the count.
pub fn report_shortfall(result: &GenerationResult) {
    if result.shortfall() > 0 {
        warn!(
            unassigned = result.shortfall(),
            eligible = result.total_eligible_students,
            "selected rooms cannot seat every eligible student"
        );
    }
}

/// Non-fatal: a dominant subject group made some same-subject desks
/// unavoidable.
pub fn report_adjacency_violations(result: &GenerationResult) {
    if result.adjacency_violations > 0 {
        warn!(
            desks = result.adjacency_violations,
            "some desks pair students from the same subject group"
        );
    }
}

/// Verify the structural invariants of a generation result before it
/// is persisted: contiguous desk numbers, no student seated twice,
/// and totals that add up.
pub fn ensure_consistent(result: &GenerationResult) -> Result<()> {
    let mut seen = HashSet::new();
    let mut occupied = 0;
    for plan in &result.plans {
        let mut plan_occupied = 0;
        for (n, desk) in plan.desk_assignments.iter().enumerate() {
            ensure!(
                desk.desk_number == n as u32,
                "plan for room {} has non-contiguous desk numbers",
                plan.room_id
            );
            for roll in desk.left_student.iter().chain(&desk.right_student) {
                ensure!(
                    seen.insert(roll.clone()),
                    "student {} is seated more than once",
                    roll
                );
            }
            plan_occupied += desk.occupants();
        }
        ensure!(
            plan.total_students == plan_occupied,
            "plan for room {} counts {} students but seats {}",
            plan.room_id,
            plan.total_students,
            plan_occupied
        );
        occupied += plan_occupied;
    }
    ensure!(
        occupied == result.total_students_assigned,
        "assigned total {} does not match {} occupied seats",
        result.total_students_assigned,
        occupied
    );
    ensure!(
        result.total_students_assigned <= result.total_eligible_students,
        "more students assigned ({}) than eligible ({})",
        result.total_students_assigned,
        result.total_eligible_students
    );
    Ok(())
}
