use crate::model::{Exam, Student};
use std::collections::HashMap;

/// The eligible students sharing one exam-relevant subject, in roll
/// order. Only used for adjacency balancing in two-per-desk mode.
#[derive(Debug)]
pub struct SubjectGroup {
    pub key: String,
    pub students: Vec<Student>,
}

/// Partition eligible students into disjoint subject groups whose
/// union is the eligible set exactly once each.
///
/// A student with several exam-relevant subjects goes to the first one
/// in the exam's subject-list order. A student eligible through their
/// department alone falls back to a group keyed by the department
/// code: they all sit the same paper, so pairing them together would
/// defeat the purpose just as much.
pub fn subject_groups(eligible: Vec<Student>, exam: &Exam) -> Vec<SubjectGroup> {
    let mut groups: Vec<SubjectGroup> = Vec::new();
    for student in eligible {
        let key = exam
            .subjects
            .iter()
            .find(|subject| student.studies(subject))
            .unwrap_or(&student.department)
            .clone();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.students.push(student),
            None => groups.push(SubjectGroup {
                key,
                students: vec![student],
            }),
        }
    }
    groups
}

/// Roll number to group key, for checking pairings after placement.
pub fn group_index(groups: &[SubjectGroup]) -> HashMap<String, String> {
    groups
        .iter()
        .flat_map(|g| {
            g.students
                .iter()
                .map(|s| (s.roll_number.clone(), g.key.clone()))
        })
        .collect()
}
