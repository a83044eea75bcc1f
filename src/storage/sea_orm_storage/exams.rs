use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::{answers, enrollments, questions, responses};
use crate::errors::{Result, SMSystemError};
use crate::models::exams::{
    entities::{Answer, Exam, Question, StudentResponse},
    requests::{
        CreateAnswerRequest, CreateExamRequest, CreateQuestionRequest, UpdateExamRequest,
        UpdateQuestionRequest,
    },
    responses::QuestionWithAnswers,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_exam_impl(&self, req: CreateExamRequest) -> Result<Exam> {
        let model = ActiveModel {
            course_id: Set(req.course_id),
            exam_name: Set(req.exam_name),
            exam_type: Set(req.exam_type.to_string()),
            start_at: Set(req.start_at),
            due_at: Set(req.due_at),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取测验
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 某课程的测验列表
    pub async fn list_exams_by_course_impl(&self, course_id: i64) -> Result<Vec<Exam>> {
        let rows = Exams::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::StartAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 学生已选课程中尚未截止的测验
    pub async fn list_upcoming_exams_for_student_impl(
        &self,
        student_id: i64,
        now: i64,
    ) -> Result<Vec<Exam>> {
        let enrollment_rows = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrollment_rows.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = enrollment_rows.iter().map(|e| e.course_id).collect();

        let rows = Exams::find()
            .filter(Column::CourseId.is_in(course_ids))
            .filter(Column::DueAt.gte(now))
            .order_by_asc(Column::StartAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 更新测验
    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = self.get_exam_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(exam_name) = update.exam_name {
            model.exam_name = Set(exam_name);
        }

        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(exam_type.to_string());
        }

        if let Some(start_at) = update.start_at {
            model.start_at = Set(start_at);
        }

        if let Some(due_at) = update.due_at {
            model.due_at = Set(due_at);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新测验失败: {e}")))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除测验
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加题目，题目和候选答案在同一事务内写入
    pub async fn create_question_impl(
        &self,
        exam_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuestionWithAnswers> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启题目事务失败: {e}")))?;

        let question_model = questions::ActiveModel {
            exam_id: Set(exam_id),
            question_type: Set(req.question_type.to_string()),
            question_text: Set(req.question_text),
            ..Default::default()
        };

        let question = question_model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("写入题目失败: {e}")))?;

        let mut created_answers = Vec::with_capacity(req.answers.len());
        for answer in req.answers {
            let answer_model = answers::ActiveModel {
                question_id: Set(question.id),
                answer_text: Set(answer.answer_text),
                is_correct: Set(answer.is_correct),
                ..Default::default()
            };

            let created = answer_model
                .insert(&txn)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("写入候选答案失败: {e}")))?;

            created_answers.push(created.into_answer());
        }

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交题目事务失败: {e}")))?;

        Ok(QuestionWithAnswers {
            question: question.into_question(),
            answers: created_answers,
        })
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 测验的题目列表，各题附带候选答案
    pub async fn list_questions_by_exam_impl(
        &self,
        exam_id: i64,
    ) -> Result<Vec<QuestionWithAnswers>> {
        let rows = questions::Entity::find()
            .filter(questions::Column::ExamId.eq(exam_id))
            .order_by_asc(questions::Column::Id)
            .find_with_related(answers::Entity)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(question, answer_rows)| QuestionWithAnswers {
                question: question.into_question(),
                answers: answer_rows.into_iter().map(|a| a.into_answer()).collect(),
            })
            .collect())
    }

    /// 修改题干
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = self.get_question_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = questions::ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(question_text) = update.question_text {
            model.question_text = Set(question_text);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目，候选答案和作答记录级联删除
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = questions::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为题目追加候选答案
    pub async fn create_answer_impl(
        &self,
        question_id: i64,
        req: CreateAnswerRequest,
    ) -> Result<Answer> {
        let model = answers::ActiveModel {
            question_id: Set(question_id),
            answer_text: Set(req.answer_text),
            is_correct: Set(req.is_correct),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("写入候选答案失败: {e}")))?;

        Ok(result.into_answer())
    }

    /// 题目的候选答案列表
    pub async fn list_answers_by_question_impl(&self, question_id: i64) -> Result<Vec<Answer>> {
        let rows = answers::Entity::find()
            .filter(answers::Column::QuestionId.eq(question_id))
            .order_by_asc(answers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询候选答案失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_answer()).collect())
    }

    /// 删除候选答案
    pub async fn delete_answer_impl(&self, id: i64) -> Result<bool> {
        let result = answers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除候选答案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 通过 ID 获取候选答案
    pub async fn get_answer_by_id_impl(&self, id: i64) -> Result<Option<Answer>> {
        let result = answers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询候选答案失败: {e}")))?;

        Ok(result.map(|m| m.into_answer()))
    }

    /// 提交作答，同一题的重复作答覆盖旧记录
    pub async fn submit_response_impl(
        &self,
        student_id: i64,
        question_id: i64,
        selected_answer_id: i64,
    ) -> Result<StudentResponse> {
        let now = chrono::Utc::now().timestamp();

        let existing = responses::Entity::find()
            .filter(responses::Column::StudentId.eq(student_id))
            .filter(responses::Column::QuestionId.eq(question_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作答记录失败: {e}")))?;

        let result = match existing {
            Some(record) => {
                let model = responses::ActiveModel {
                    id: Set(record.id),
                    selected_answer_id: Set(selected_answer_id),
                    responded_at: Set(now),
                    ..Default::default()
                };

                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("更新作答失败: {e}")))?
            }
            None => {
                let model = responses::ActiveModel {
                    student_id: Set(student_id),
                    question_id: Set(question_id),
                    selected_answer_id: Set(selected_answer_id),
                    responded_at: Set(now),
                    ..Default::default()
                };

                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("写入作答失败: {e}")))?
            }
        };

        Ok(result.into_response())
    }

    /// 某学生在某测验下的全部作答
    pub async fn list_responses_by_student_for_exam_impl(
        &self,
        student_id: i64,
        exam_id: i64,
    ) -> Result<Vec<StudentResponse>> {
        let question_rows = questions::Entity::find()
            .filter(questions::Column::ExamId.eq(exam_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询题目列表失败: {e}")))?;

        let question_ids: Vec<i64> = question_rows.into_iter().map(|q| q.id).collect();
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = responses::Entity::find()
            .filter(responses::Column::StudentId.eq(student_id))
            .filter(responses::Column::QuestionId.is_in(question_ids))
            .order_by_asc(responses::Column::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询作答列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_response()).collect())
    }
}
