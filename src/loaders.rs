#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use crate::model::{Exam, Room, SeatingPlan, Student};
use eyre::{Result, WrapErr, bail};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::str::FromStr;
use tracing::trace;

pub struct Loader {
    conn: AnyConnection,
}

impl Loader {
    pub async fn new(s: &str) -> Result<Self> {
        Ok(Self {
            conn: AnyConnection::connect_with(&AnyConnectOptions::from_str(s)?).await?,
        })
    }

    /// Load the full roster with each student's subject list merged in.
    pub async fn load_students(&mut self) -> Result<Vec<Student>> {
        let mut students =
            sqlx::query("SELECT id, roll_number, name, department, email FROM students")
                .map(|row: AnyRow| Student {
                    id: row.get("id"),
                    roll_number: row.get("roll_number"),
                    name: row.get("name"),
                    department: row.get("department"),
                    subjects: Vec::new(),
                    email: row.get("email"),
                })
                .fetch_all(&mut self.conn)
                .await
                .wrap_err("cannot load students")?;
        let subjects: Vec<(String, String)> =
            sqlx::query("SELECT student_id, subject FROM student_subjects")
                .map(|row: AnyRow| (row.get("student_id"), row.get("subject")))
                .fetch_all(&mut self.conn)
                .await
                .wrap_err("cannot load student subjects")?;
        for student in &mut students {
            student.subjects = subjects
                .iter()
                .filter(|(id, _)| *id == student.id)
                .map(|(_, subject)| subject.clone())
                .collect();
            trace!(
                student = %student.roll_number,
                subjects = ?student.subjects,
                "student subjects loaded",
            );
        }
        Ok(students)
    }

    pub async fn load_exam(&mut self, exam_id: &str) -> Result<Exam> {
        let exam = sqlx::query("SELECT id, name, exam_type, date, time FROM exams WHERE id = ?")
            .bind(exam_id)
            .map(|row: AnyRow| Exam {
                id: row.get("id"),
                name: row.get("name"),
                exam_type: row.get("exam_type"),
                date: row.get("date"),
                time: row.get("time"),
                departments: Vec::new(),
                subjects: Vec::new(),
            })
            .fetch_optional(&mut self.conn)
            .await
            .wrap_err("cannot load exam")?;
        let Some(mut exam) = exam else {
            bail!("exam {exam_id} not found");
        };
        exam.departments = sqlx::query("SELECT department FROM exam_departments WHERE exam_id = ?")
            .bind(exam_id)
            .map(|row: AnyRow| row.get::<String, _>("department"))
            .fetch_all(&mut self.conn)
            .await
            .wrap_err("cannot load exam departments")?;
        exam.subjects = sqlx::query("SELECT subject FROM exam_subjects WHERE exam_id = ?")
            .bind(exam_id)
            .map(|row: AnyRow| row.get::<String, _>("subject"))
            .fetch_all(&mut self.conn)
            .await
            .wrap_err("cannot load exam subjects")?;
        Ok(exam)
    }

    /// Load the selected rooms, preserving the caller-given order: the
    /// filler consumes rooms strictly in this sequence.
    pub async fn load_rooms(&mut self, room_ids: &[String]) -> Result<Vec<Room>> {
        let mut rooms = Vec::with_capacity(room_ids.len());
        for room_id in room_ids {
            let room = sqlx::query(
                "SELECT id, name, capacity, desk_count, grid_rows, grid_cols FROM rooms WHERE id = ?",
            )
            .bind(room_id)
            .map(|row: AnyRow| Room {
                id: row.get("id"),
                name: row.get("name"),
                capacity: row.get::<i32, _>("capacity") as u32,
                desk_count: row.get::<i32, _>("desk_count") as u32,
                rows: row.get::<i32, _>("grid_rows") as u32,
                columns: row.get::<i32, _>("grid_cols") as u32,
            })
            .fetch_optional(&mut self.conn)
            .await
            .wrap_err("cannot load rooms")?;
            match room {
                Some(room) => rooms.push(room),
                None => bail!("room {room_id} not found"),
            }
        }
        Ok(rooms)
    }

    /// Replace every stored plan for the exam with the new set in one
    /// transaction, so a reader never observes a mixture of old and
    /// new plans. This is also what serializes concurrent regeneration
    /// of the same exam.
    pub async fn save_plans(&mut self, exam_id: &str, plans: &[SeatingPlan]) -> Result<()> {
        let mut trans = self.conn.begin().await?;
        sqlx::query(
            "DELETE FROM desk_assignments \
             WHERE plan_id IN (SELECT id FROM seating_plans WHERE exam_id = ?)",
        )
        .bind(exam_id)
        .execute(&mut *trans)
        .await
        .wrap_err("cannot delete previous desk assignments")?;
        sqlx::query("DELETE FROM seating_plans WHERE exam_id = ?")
            .bind(exam_id)
            .execute(&mut *trans)
            .await
            .wrap_err("cannot delete previous seating plans")?;
        for plan in plans {
            sqlx::query(
                "INSERT INTO seating_plans (id, exam_id, room_id, seating_mode, total_students) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&plan.id)
            .bind(&plan.exam_id)
            .bind(&plan.room_id)
            .bind(plan.seating_mode.to_string())
            .bind(plan.total_students as i32)
            .execute(&mut *trans)
            .await
            .wrap_err("cannot save seating plan")?;
            for desk in &plan.desk_assignments {
                sqlx::query(
                    "INSERT INTO desk_assignments \
                     (plan_id, desk_number, desk_row, desk_col, left_student, right_student) \
                     VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(&plan.id)
                .bind(desk.desk_number as i32)
                .bind(desk.row as i32)
                .bind(desk.col as i32)
                .bind(desk.left_student.as_deref())
                .bind(desk.right_student.as_deref())
                .execute(&mut *trans)
                .await
                .wrap_err("cannot save desk assignments")?;
            }
        }
        trans
            .commit()
            .await
            .wrap_err("error when committing transaction")?;
        Ok(())
    }
}
