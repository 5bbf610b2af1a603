use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub exam_type: String,
    pub date: String,
    pub time: String,
    pub departments: Vec<String>,
    pub subjects: Vec<String>,
}

impl Exam {
    /// An exam with neither departments nor subjects cannot define an
    /// eligible population.
    pub fn has_eligibility_criteria(&self) -> bool {
        !self.departments.is_empty() || !self.subjects.is_empty()
    }
}
