use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Student {
    pub id: String,
    pub roll_number: String,
    pub name: String,
    pub department: String,
    pub subjects: Vec<String>,
    pub email: Option<String>,
}

impl Student {
    pub fn studies(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}
