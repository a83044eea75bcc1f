use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement,
        requests::CreateAnnouncementRequest,
        responses::AnnouncementListResponse,
    },
    courses::{
        entities::{Course, Schedule},
        requests::{CourseListQuery, CreateCourseRequest, CreateScheduleRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::Enrollment,
        responses::{EnrollResponse, EnrollmentWithCourse},
    },
    exams::{
        entities::{Answer, Exam, Question, StudentResponse},
        requests::{
            CreateAnswerRequest, CreateExamRequest, CreateQuestionRequest, UpdateExamRequest,
            UpdateQuestionRequest,
        },
        responses::QuestionWithAnswers,
    },
    feedback::{entities::Feedback, requests::CreateFeedbackRequest},
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, UpdateGradeRequest},
        responses::GradeWithCourse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, UpdateNotificationRequest},
        responses::NotificationListResponse,
    },
    org::{
        entities::{Department, Hall, Program},
        requests::{
            CreateDepartmentRequest, CreateHallRequest, CreateProgramRequest,
            UpdateDepartmentRequest, UpdateProgramRequest,
        },
    },
    reports::entities::Report,
    staff::{
        entities::StaffMember,
        requests::{CreateStaffRequest, StaffListQuery},
        responses::StaffListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学生档案方法
    // 建立学生档案
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过档案ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过账号ID获取学生
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生
    async fn get_student_by_index_number(&self, index_number: &str) -> Result<Option<Student>>;
    // 分页列出学生（附带账号信息）
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生档案
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生档案
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 学生总数
    async fn count_students(&self) -> Result<u64>;

    /// 教职工档案方法
    async fn create_staff(&self, staff: CreateStaffRequest) -> Result<StaffMember>;
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<StaffMember>>;
    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<StaffMember>>;
    async fn list_staff_with_pagination(&self, query: StaffListQuery)
    -> Result<StaffListResponse>;
    async fn delete_staff(&self, id: i64) -> Result<bool>;
    async fn count_staff(&self) -> Result<u64>;

    /// 组织结构方法
    async fn create_department(&self, dept: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;
    async fn count_departments(&self) -> Result<u64>;

    async fn create_program(&self, program: CreateProgramRequest) -> Result<Program>;
    async fn get_program_by_id(&self, id: i64) -> Result<Option<Program>>;
    async fn list_programs(&self) -> Result<Vec<Program>>;
    async fn update_program(&self, id: i64, update: UpdateProgramRequest)
    -> Result<Option<Program>>;
    async fn delete_program(&self, id: i64) -> Result<bool>;

    async fn create_hall(&self, hall: CreateHallRequest) -> Result<Hall>;
    async fn get_hall_by_id(&self, id: i64) -> Result<Option<Hall>>;
    async fn list_halls(&self) -> Result<Vec<Hall>>;
    async fn delete_hall(&self, id: i64) -> Result<bool>;

    /// 课程方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    async fn count_courses(&self) -> Result<u64>;
    // 指定教职工授课
    async fn assign_course_to_staff(&self, staff_id: i64, course_id: i64) -> Result<bool>;
    // 某教职工的授课列表
    async fn list_courses_by_staff(&self, staff_id: i64) -> Result<Vec<Course>>;
    // 课程纳入专业培养计划
    async fn attach_course_to_program(&self, program_id: i64, course_id: i64) -> Result<bool>;
    // 某专业的课程列表
    async fn list_courses_by_program(&self, program_id: i64) -> Result<Vec<Course>>;

    /// 课表方法
    async fn create_schedule(
        &self,
        course_id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<Schedule>;
    async fn list_schedules_by_course(&self, course_id: i64) -> Result<Vec<Schedule>>;
    async fn delete_schedule(&self, id: i64) -> Result<bool>;

    /// 选课方法
    // 批量选课，单事务执行，重复选课直接跳过
    async fn enroll_student(
        &self,
        student_id: i64,
        course_ids: Vec<i64>,
        enrollment_date: chrono::NaiveDate,
    ) -> Result<EnrollResponse>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn list_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<EnrollmentWithCourse>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 成绩方法
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn get_grade_by_enrollment(
        &self,
        enrollment_id: i64,
        year: i32,
        semester: i32,
    ) -> Result<Option<Grade>>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;
    // 学生成绩单，附带课程信息
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<GradeWithCourse>>;

    async fn list_grades_by_enrollment(&self, enrollment_id: i64) -> Result<Vec<Grade>>;

    /// 考试方法
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams_by_course(&self, course_id: i64) -> Result<Vec<Exam>>;
    // 学生已选课程中 due_at 未过的测验
    async fn list_upcoming_exams_for_student(&self, student_id: i64, now: i64)
    -> Result<Vec<Exam>>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;
    // 添加题目并同时建出候选答案，单事务执行
    async fn create_question(
        &self,
        exam_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<QuestionWithAnswers>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn list_questions_by_exam(&self, exam_id: i64) -> Result<Vec<QuestionWithAnswers>>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;
    async fn create_answer(&self, question_id: i64, answer: CreateAnswerRequest) -> Result<Answer>;
    async fn list_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>>;
    async fn delete_answer(&self, id: i64) -> Result<bool>;
    async fn get_answer_by_id(&self, id: i64) -> Result<Option<Answer>>;
    // 学生作答，重复作答覆盖旧记录
    async fn submit_response(
        &self,
        student_id: i64,
        question_id: i64,
        selected_answer_id: i64,
    ) -> Result<StudentResponse>;
    async fn list_responses_by_student_for_exam(
        &self,
        student_id: i64,
        exam_id: i64,
    ) -> Result<Vec<StudentResponse>>;

    /// 通知方法
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification>;
    async fn list_notifications(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
        unread_only: bool,
    ) -> Result<NotificationListResponse>;
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    async fn update_notification(
        &self,
        id: i64,
        update: UpdateNotificationRequest,
    ) -> Result<Option<Notification>>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;
    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64>;
    // 标记已读，只允许本人操作
    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;

    /// 公告方法
    async fn create_announcement(
        &self,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn list_announcements(
        &self,
        page: i64,
        size: i64,
        target_id: Option<i64>,
    ) -> Result<AnnouncementListResponse>;
    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>>;
    async fn delete_announcement(&self, id: i64) -> Result<bool>;

    /// 反馈方法
    async fn create_feedback(
        &self,
        author_id: i64,
        feedback: CreateFeedbackRequest,
    ) -> Result<Feedback>;
    async fn list_feedback_for_user(&self, user_id: i64) -> Result<Vec<Feedback>>;
    async fn delete_feedback(&self, id: i64) -> Result<bool>;

    /// 报表方法
    async fn save_report(&self, report_type: &str, data: serde_json::Value) -> Result<Report>;
    async fn get_report_by_id(&self, id: i64) -> Result<Option<Report>>;
    async fn list_recent_reports(&self, limit: u64) -> Result<Vec<Report>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
