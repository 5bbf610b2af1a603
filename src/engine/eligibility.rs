use super::ValidationError;
use crate::model::{Exam, Student};

/// Select the students belonging to an exam, sorted by roll number.
/// The sorted order is the deterministic baseline every later stage
/// builds on.
///
/// A student is eligible when their department is listed on the exam,
/// or when at least one of their subjects is. The inclusive rule keeps
/// cross-department electives in the room.
pub fn eligible_students(
    population: &[Student],
    exam: &Exam,
) -> Result<Vec<Student>, ValidationError> {
    if !exam.has_eligibility_criteria() {
        return Err(ValidationError::NoEligibilityCriteria(exam.id.clone()));
    }
    let mut eligible = population
        .iter()
        .filter(|s| is_eligible(s, exam))
        .cloned()
        .collect::<Vec<_>>();
    eligible.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));
    Ok(eligible)
}

fn is_eligible(student: &Student, exam: &Exam) -> bool {
    exam.departments.contains(&student.department)
        || student.subjects.iter().any(|s| exam.subjects.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{exam, student};

    #[test]
    fn department_or_subject_match_is_sufficient() {
        let population = vec![
            student("21CS003", "CS", &["Math"]),
            student("21ME001", "ME", &["Thermodynamics"]),
            student("21IT002", "IT", &["Math", "Networks"]),
            student("21EE004", "EE", &["Circuits"]),
        ];
        let exam = exam(&["CS"], &["Math"]);
        let eligible = eligible_students(&population, &exam).unwrap();
        let rolls = eligible
            .iter()
            .map(|s| s.roll_number.as_str())
            .collect::<Vec<_>>();
        // 21CS003 by department, 21IT002 by subject; sorted by roll
        assert_eq!(rolls, ["21CS003", "21IT002"]);
    }

    #[test]
    fn output_is_roll_sorted_regardless_of_input_order() {
        let population = vec![
            student("21CS009", "CS", &[]),
            student("21CS001", "CS", &[]),
            student("21CS005", "CS", &[]),
        ];
        let eligible = eligible_students(&population, &exam(&["CS"], &[])).unwrap();
        let rolls = eligible
            .iter()
            .map(|s| s.roll_number.as_str())
            .collect::<Vec<_>>();
        assert_eq!(rolls, ["21CS001", "21CS005", "21CS009"]);
    }

    #[test]
    fn exam_without_criteria_is_rejected() {
        let population = vec![student("21CS001", "CS", &["Math"])];
        let err = eligible_students(&population, &exam(&[], &[])).unwrap_err();
        assert!(matches!(err, ValidationError::NoEligibilityCriteria(_)));
    }
}
