use super::SeaOrmStorage;
use crate::entity::courses;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{Result, SMSystemError};
use crate::models::enrollments::{
    entities::Enrollment,
    responses::{EnrollResponse, EnrollmentWithCourse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量选课，单事务执行。已选过的课程计入 skipped，不视为错误。
    pub async fn enroll_student_impl(
        &self,
        student_id: i64,
        course_ids: Vec<i64>,
        enrollment_date: chrono::NaiveDate,
    ) -> Result<EnrollResponse> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启选课事务失败: {e}")))?;

        let mut enrolled = Vec::new();
        let mut skipped = Vec::new();

        for course_id in course_ids {
            let existing = Enrollments::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::CourseId.eq(course_id))
                .one(&txn)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

            if existing.is_some() {
                skipped.push(course_id);
                continue;
            }

            let model = ActiveModel {
                student_id: Set(student_id),
                course_id: Set(course_id),
                enrollment_date: Set(enrollment_date.to_string()),
                ..Default::default()
            };

            let result = model
                .insert(&txn)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("写入选课记录失败: {e}")))?;

            enrolled.push(result.into_enrollment());
        }

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交选课事务失败: {e}")))?;

        Ok(EnrollResponse { enrolled, skipped })
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 某学生的选课列表，连带课程信息
    pub async fn list_enrollments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<EnrollmentWithCourse>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(courses::Entity)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|c| EnrollmentWithCourse {
                    enrollment: enrollment.into_enrollment(),
                    course: c.into_course(),
                })
            })
            .collect())
    }

    /// 退课
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
