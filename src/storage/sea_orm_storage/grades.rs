use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::{courses, enrollments};
use crate::errors::{Result, SMSystemError};
use crate::models::grades::{
    entities::Grade,
    requests::{CreateGradeRequest, UpdateGradeRequest},
    responses::GradeWithCourse,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 录入成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            enrollment_id: Set(req.enrollment_id),
            year: Set(req.year),
            semester: Set(req.semester),
            quiz: Set(req.quiz),
            assignment: Set(req.assignment),
            midsem: Set(req.midsem),
            exam: Set(req.exam),
            letter_grade: Set(req.letter_grade),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 同一选课记录同一学期的成绩至多一条
    pub async fn get_grade_by_enrollment_impl(
        &self,
        enrollment_id: i64,
        year: i32,
        semester: i32,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .filter(Column::Year.eq(year))
            .filter(Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 更新成绩分项
    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(quiz) = update.quiz {
            model.quiz = Set(quiz);
        }

        if let Some(assignment) = update.assignment {
            model.assignment = Set(assignment);
        }

        if let Some(midsem) = update.midsem {
            model.midsem = Set(midsem);
        }

        if let Some(exam) = update.exam {
            model.exam = Set(exam);
        }

        if let Some(letter_grade) = update.letter_grade {
            model.letter_grade = Set(Some(letter_grade));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某条选课记录的全部学期成绩
    pub async fn list_grades_by_enrollment_impl(&self, enrollment_id: i64) -> Result<Vec<Grade>> {
        let rows = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Semester)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 学生成绩单：经由选课记录关联到课程
    pub async fn list_grades_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<GradeWithCourse>> {
        let enrollment_rows = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .find_also_related(courses::Entity)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrollment_rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut course_by_enrollment: HashMap<i64, courses::Model> = HashMap::new();
        let mut enrollment_ids = Vec::new();
        for (enrollment, course) in enrollment_rows {
            enrollment_ids.push(enrollment.id);
            if let Some(course) = course {
                course_by_enrollment.insert(enrollment.id, course);
            }
        }

        let grade_rows = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Semester)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(grade_rows
            .into_iter()
            .filter_map(|m| {
                let course = course_by_enrollment.get(&m.enrollment_id)?.clone();
                let grade = m.into_grade();
                let total = grade.total();
                Some(GradeWithCourse {
                    grade,
                    total,
                    course: course.into_course(),
                })
            })
            .collect())
    }
}
