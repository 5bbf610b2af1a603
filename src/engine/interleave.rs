use super::groups::SubjectGroup;
use crate::model::Student;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use tracing::debug;

/// Merge subject groups into a single ordering so that, once cut into
/// consecutive pairs, paired students differ in group whenever
/// structurally possible.
///
/// Classic minimum-adjacent-repeat rearrangement: always take the
/// group with the most students left, with a one-slot cooldown on the
/// group just placed. A zero-repeat ordering exists iff the largest
/// group holds at most half the students (rounded up); past that
/// bound the ordering still completes and the surplus shows up as
/// same-group pairs. Ties go to the lexicographically smallest group
/// key, students leave each group in roll order, so the output is
/// fully reproducible.
pub fn interleave(groups: Vec<SubjectGroup>) -> Vec<Student> {
    let total = groups.iter().map(|g| g.students.len()).sum::<usize>();
    if let Some(largest) = groups.iter().map(|g| g.students.len()).max() {
        if largest > total.div_ceil(2) {
            debug!(
                largest_group = largest,
                students = total,
                "dominant subject group, some same-subject pairs are unavoidable"
            );
        }
    }
    let mut queues = Vec::with_capacity(groups.len());
    let mut heap = BinaryHeap::with_capacity(groups.len());
    for (idx, group) in groups.into_iter().enumerate() {
        if !group.students.is_empty() {
            heap.push((group.students.len(), Reverse(group.key), idx));
        }
        queues.push(VecDeque::from(group.students));
    }
    let mut ordering = Vec::with_capacity(total);
    let mut last: Option<usize> = None;
    while let Some(mut entry) = heap.pop() {
        // Cooldown: never the same group twice in a row while any
        // other group still has students.
        if last == Some(entry.2) && !heap.is_empty() {
            let runner_up = heap.pop().expect("heap is non-empty");
            heap.push(entry);
            entry = runner_up;
        }
        let student = queues[entry.2]
            .pop_front()
            .expect("group queue out of sync with heap");
        ordering.push(student);
        last = Some(entry.2);
        if entry.0 > 1 {
            entry.0 -= 1;
            heap.push(entry);
        }
    }
    ordering
}
