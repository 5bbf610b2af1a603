mod exam;
mod plan;
mod room;
mod student;

pub use exam::Exam;
pub use plan::{DeskAssignment, GenerationResult, SeatingMode, SeatingPlan};
pub use room::Room;
pub use student::Student;
