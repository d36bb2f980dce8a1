//! Student and curator administration.
//!
//! Every mutation re-fetches authoritative state by invalidating the
//! relevant prefix: approving a course access request, for instance,
//! drops every cached entry for that student.

use super::DataService;
use crate::api::{ApiError, CreateCuratorArgs, CreateStudentArgs, UpdateCuratorArgs, UpdateStudentCourseArgs};
use crate::cache::QueryKey;
use crate::models::{Curator, Student, StudentCourse};

impl DataService {
    pub async fn students(&self) -> Result<Vec<Student>, ApiError> {
        let key = QueryKey::new(["students", "list"]);
        self.cached(key, || self.backend().fetch_students()).await
    }

    pub async fn create_student(&self, args: &CreateStudentArgs) -> Result<Student, ApiError> {
        let student = self.backend().create_student(args).await?;
        self.log(format!("Admin: created student {}", student.id));
        self.invalidate(&["students"]).await;
        Ok(student)
    }

    pub async fn student_course(&self, student_id: &str, course_id: &str) -> Result<StudentCourse, ApiError> {
        let key = QueryKey::new(["students", student_id, "courses", course_id]);
        self.cached(key, || self.backend().fetch_student_course(student_id, course_id))
            .await
    }

    /// Approve, reject, or re-date a student's course access.
    pub async fn update_student_course(
        &self,
        student_id: &str,
        course_id: &str,
        args: &UpdateStudentCourseArgs,
    ) -> Result<StudentCourse, ApiError> {
        let record = self.backend().update_student_course(student_id, course_id, args).await?;
        self.log(format!(
            "Admin: student {student_id} course {course_id} -> {}",
            record.status.label()
        ));
        self.invalidate(&["students", student_id]).await;
        self.invalidate(&["students", "list"]).await;
        // Access changes are visible on the catalog too
        self.invalidate(&["courses"]).await;
        Ok(record)
    }

    pub async fn detach_student_course(&self, student_id: &str, course_id: &str) -> Result<(), ApiError> {
        self.backend().detach_student_course(student_id, course_id).await?;
        self.log(format!("Admin: detached course {course_id} from student {student_id}"));
        self.invalidate(&["students", student_id]).await;
        self.invalidate(&["students", "list"]).await;
        self.invalidate(&["courses"]).await;
        Ok(())
    }

    pub async fn reset_student_password(&self, student_id: &str) -> Result<(), ApiError> {
        self.backend().reset_student_password(student_id).await?;
        self.log(format!("Admin: reset password for student {student_id}"));
        Ok(())
    }

    pub async fn curators(&self) -> Result<Vec<Curator>, ApiError> {
        let key = QueryKey::new(["curators", "list"]);
        self.cached(key, || self.backend().fetch_curators()).await
    }

    pub async fn create_curator(&self, args: &CreateCuratorArgs) -> Result<Curator, ApiError> {
        let curator = self.backend().create_curator(args).await?;
        self.log(format!("Admin: created curator {}", curator.id));
        self.invalidate(&["curators"]).await;
        Ok(curator)
    }

    pub async fn update_curator(&self, curator_id: &str, args: &UpdateCuratorArgs) -> Result<Curator, ApiError> {
        let curator = self.backend().update_curator(curator_id, args).await?;
        self.log(format!("Admin: updated curator {curator_id}"));
        self.invalidate(&["curators"]).await;
        Ok(curator)
    }

    pub async fn delete_curator(&self, curator_id: &str) -> Result<(), ApiError> {
        self.backend().delete_curator(curator_id).await?;
        self.log(format!("Admin: deleted curator {curator_id}"));
        self.invalidate(&["curators"]).await;
        Ok(())
    }

    pub async fn reset_curator_password(&self, curator_id: &str) -> Result<(), ApiError> {
        self.backend().reset_curator_password(curator_id).await?;
        self.log(format!("Admin: reset password for curator {curator_id}"));
        Ok(())
    }
}
