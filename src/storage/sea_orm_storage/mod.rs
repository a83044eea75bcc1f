//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod courses;
mod enrollments;
mod exams;
mod feedback;
mod grades;
mod notifications;
mod org;
mod reports;
mod staff;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SMSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url, config.database.pool_size).await
    }

    /// 指定连接串创建存储实例，测试里用它连内存库（池大小设 1）
    pub async fn new_with_url(url: &str, pool_size: u32) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size).await?
        } else {
            Self::connect_generic(&db_url, pool_size).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let timeout = AppConfig::get().database.timeout;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        let timeout = AppConfig::get().database.timeout;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    announcements::{
        entities::Announcement, requests::CreateAnnouncementRequest,
        responses::AnnouncementListResponse,
    },
    courses::{
        entities::{Course, Schedule},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateScheduleRequest, UpdateCourseRequest,
        },
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn get_student_by_index_number(&self, index_number: &str) -> Result<Option<Student>> {
        self.get_student_by_index_number_impl(index_number).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // 教职工模块
    async fn create_staff(&self, staff: CreateStaffRequest) -> Result<StaffMember> {
        self.create_staff_impl(staff).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<StaffMember>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<StaffMember>> {
        self.get_staff_by_user_id_impl(user_id).await
    }

    async fn list_staff_with_pagination(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    async fn count_staff(&self) -> Result<u64> {
        self.count_staff_impl().await
    }

    // 组织结构模块
    async fn create_department(&self, dept: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(dept).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    async fn count_departments(&self) -> Result<u64> {
        self.count_departments_impl().await
    }

    async fn create_program(&self, program: CreateProgramRequest) -> Result<Program> {
        self.create_program_impl(program).await
    }

    async fn get_program_by_id(&self, id: i64) -> Result<Option<Program>> {
        self.get_program_by_id_impl(id).await
    }

    async fn list_programs(&self) -> Result<Vec<Program>> {
        self.list_programs_impl().await
    }

    async fn update_program(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<Program>> {
        self.update_program_impl(id, update).await
    }

    async fn delete_program(&self, id: i64) -> Result<bool> {
        self.delete_program_impl(id).await
    }

    async fn create_hall(&self, hall: CreateHallRequest) -> Result<Hall> {
        self.create_hall_impl(hall).await
    }

    async fn get_hall_by_id(&self, id: i64) -> Result<Option<Hall>> {
        self.get_hall_by_id_impl(id).await
    }

    async fn list_halls(&self) -> Result<Vec<Hall>> {
        self.list_halls_impl().await
    }

    async fn delete_hall(&self, id: i64) -> Result<bool> {
        self.delete_hall_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    async fn assign_course_to_staff(&self, staff_id: i64, course_id: i64) -> Result<bool> {
        self.assign_course_to_staff_impl(staff_id, course_id).await
    }

    async fn list_courses_by_staff(&self, staff_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_staff_impl(staff_id).await
    }

    async fn attach_course_to_program(&self, program_id: i64, course_id: i64) -> Result<bool> {
        self.attach_course_to_program_impl(program_id, course_id)
            .await
    }

    async fn list_courses_by_program(&self, program_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_program_impl(program_id).await
    }

    // 课表模块
    async fn create_schedule(
        &self,
        course_id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<Schedule> {
        self.create_schedule_impl(course_id, schedule).await
    }

    async fn list_schedules_by_course(&self, course_id: i64) -> Result<Vec<Schedule>> {
        self.list_schedules_by_course_impl(course_id).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    // 选课模块
    async fn enroll_student(
        &self,
        student_id: i64,
        course_ids: Vec<i64>,
        enrollment_date: chrono::NaiveDate,
    ) -> Result<EnrollResponse> {
        self.enroll_student_impl(student_id, course_ids, enrollment_date)
            .await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<EnrollmentWithCourse>> {
        self.list_enrollments_by_student_impl(student_id).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn get_grade_by_enrollment(
        &self,
        enrollment_id: i64,
        year: i32,
        semester: i32,
    ) -> Result<Option<Grade>> {
        self.get_grade_by_enrollment_impl(enrollment_id, year, semester)
            .await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<GradeWithCourse>> {
        self.list_grades_by_student_impl(student_id).await
    }

    async fn list_grades_by_enrollment(&self, enrollment_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_enrollment_impl(enrollment_id).await
    }

    // 考试模块
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams_by_course(&self, course_id: i64) -> Result<Vec<Exam>> {
        self.list_exams_by_course_impl(course_id).await
    }

    async fn list_upcoming_exams_for_student(
        &self,
        student_id: i64,
        now: i64,
    ) -> Result<Vec<Exam>> {
        self.list_upcoming_exams_for_student_impl(student_id, now)
            .await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    async fn create_question(
        &self,
        exam_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<QuestionWithAnswers> {
        self.create_question_impl(exam_id, question).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions_by_exam(&self, exam_id: i64) -> Result<Vec<QuestionWithAnswers>> {
        self.list_questions_by_exam_impl(exam_id).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn create_answer(&self, question_id: i64, answer: CreateAnswerRequest) -> Result<Answer> {
        self.create_answer_impl(question_id, answer).await
    }

    async fn list_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        self.list_answers_by_question_impl(question_id).await
    }

    async fn delete_answer(&self, id: i64) -> Result<bool> {
        self.delete_answer_impl(id).await
    }

    async fn get_answer_by_id(&self, id: i64) -> Result<Option<Answer>> {
        self.get_answer_by_id_impl(id).await
    }

    async fn submit_response(
        &self,
        student_id: i64,
        question_id: i64,
        selected_answer_id: i64,
    ) -> Result<StudentResponse> {
        self.submit_response_impl(student_id, question_id, selected_answer_id)
            .await
    }

    async fn list_responses_by_student_for_exam(
        &self,
        student_id: i64,
        exam_id: i64,
    ) -> Result<Vec<StudentResponse>> {
        self.list_responses_by_student_for_exam_impl(student_id, exam_id)
            .await
    }

    // 通知模块
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn list_notifications(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
        unread_only: bool,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_impl(user_id, page, size, unread_only)
            .await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn update_notification(
        &self,
        id: i64,
        update: UpdateNotificationRequest,
    ) -> Result<Option<Notification>> {
        self.update_notification_impl(id, update).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64> {
        self.count_unread_notifications_impl(user_id).await
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id, user_id).await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(author_id, announcement).await
    }

    async fn list_announcements(
        &self,
        page: i64,
        size: i64,
        target_id: Option<i64>,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_impl(page, size, target_id).await
    }

    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>> {
        self.list_recent_announcements_impl(limit).await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 反馈模块
    async fn create_feedback(
        &self,
        author_id: i64,
        feedback: CreateFeedbackRequest,
    ) -> Result<Feedback> {
        self.create_feedback_impl(author_id, feedback).await
    }

    async fn list_feedback_for_user(&self, user_id: i64) -> Result<Vec<Feedback>> {
        self.list_feedback_for_user_impl(user_id).await
    }

    async fn delete_feedback(&self, id: i64) -> Result<bool> {
        self.delete_feedback_impl(id).await
    }

    // 报表模块
    async fn save_report(&self, report_type: &str, data: serde_json::Value) -> Result<Report> {
        self.save_report_impl(report_type, data).await
    }

    async fn get_report_by_id(&self, id: i64) -> Result<Option<Report>> {
        self.get_report_by_id_impl(id).await
    }

    async fn list_recent_reports(&self, limit: u64) -> Result<Vec<Report>> {
        self.list_recent_reports_impl(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::Semester;
    use crate::models::exams::entities::{ExamType, QuestionType};
    use crate::models::exams::requests::CreateAnswerRequest;
    use crate::models::students::entities::SchoolYear;
    use crate::models::users::entities::{Sex, UserRole};

    // 内存库必须把连接池压到 1，否则每个连接各自一份空库
    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_url(":memory:", 1)
            .await
            .expect("failed to open in-memory storage")
    }

    fn user_request(username: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "argon2-hash-placeholder".to_string(),
            role,
            first_name: "Kofi".to_string(),
            middle_name: None,
            last_name: "Owusu".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(2003, 9, 12).unwrap(),
            sex: Sex::Male,
            address: "Kumasi".to_string(),
            image_url: None,
            department_id: None,
        }
    }

    async fn seed_student(storage: &SeaOrmStorage, username: &str, index_number: &str) -> Student {
        let user = storage
            .create_user_impl(user_request(username, UserRole::Student))
            .await
            .unwrap();

        storage
            .create_student_impl(CreateStudentRequest {
                user_id: user.id,
                index_number: index_number.to_string(),
                date_admitted: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                year: SchoolYear::Freshman,
                program_id: None,
                hall_id: None,
            })
            .await
            .unwrap()
    }

    async fn seed_course(storage: &SeaOrmStorage, code: &str) -> Course {
        let dept = storage
            .create_department_impl(CreateDepartmentRequest {
                name: format!("Dept {code}"),
                head_id: None,
            })
            .await
            .unwrap();

        storage
            .create_course_impl(CreateCourseRequest {
                name: format!("Course {code}"),
                code: code.to_string(),
                department_id: dept.id,
                credits: 3,
                year: SchoolYear::Freshman,
                semester: Semester::One,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn user_crud_round_trip() {
        let storage = memory_storage().await;

        let created = storage
            .create_user_impl(user_request("ama", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(created.username, "ama");
        assert_eq!(created.role, UserRole::Student);

        let by_email = storage
            .get_user_by_email_impl("ama@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);

        let by_identifier = storage
            .get_user_by_username_or_email_impl("ama")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_identifier.id, created.id);

        let updated = storage
            .update_user_impl(
                created.id,
                UpdateUserRequest {
                    email: Some("ama2@example.com".to_string()),
                    password: None,
                    role: None,
                    status: None,
                    first_name: None,
                    middle_name: None,
                    last_name: None,
                    date_of_birth: None,
                    sex: None,
                    address: None,
                    image_url: None,
                    department_id: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.email, "ama2@example.com");

        assert!(storage.delete_user_impl(created.id).await.unwrap());
        assert!(
            storage
                .get_user_by_id_impl(created.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn user_list_pagination_clamps_out_of_range() {
        let storage = memory_storage().await;
        for i in 0..3 {
            storage
                .create_user_impl(user_request(&format!("user{i}"), UserRole::Student))
                .await
                .unwrap();
        }

        // page 0 和超大 size 都被压回合法区间
        let listed = storage
            .list_users_with_pagination_impl(UserListQuery {
                page: 0,
                size: 500,
                role: None,
                status: None,
                department_id: None,
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(listed.items.len(), 3);
        assert_eq!(listed.pagination.page, 1);
        assert_eq!(listed.pagination.page_size, 100);

        let second_page = storage
            .list_users_with_pagination_impl(UserListQuery {
                page: 2,
                size: 2,
                role: None,
                status: None,
                department_id: None,
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(second_page.items.len(), 1);
        assert_eq!(second_page.pagination.total, 3);
        assert_eq!(second_page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn enrollment_skips_duplicate_courses() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "yaw", "CS0001").await;
        let course_a = seed_course(&storage, "CS101").await;
        let course_b = seed_course(&storage, "CS102").await;
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let first = storage
            .enroll_student_impl(student.id, vec![course_a.id, course_b.id], date)
            .await
            .unwrap();
        assert_eq!(first.enrolled.len(), 2);
        assert!(first.skipped.is_empty());

        // 重复选 course_a，只应跳过不报错
        let second = storage
            .enroll_student_impl(student.id, vec![course_a.id], date)
            .await
            .unwrap();
        assert!(second.enrolled.is_empty());
        assert_eq!(second.skipped, vec![course_a.id]);

        let list = storage
            .list_enrollments_by_student_impl(student.id)
            .await
            .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn grade_totals_follow_components() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "esi", "CS0002").await;
        let course = seed_course(&storage, "MA201").await;
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let enrolled = storage
            .enroll_student_impl(student.id, vec![course.id], date)
            .await
            .unwrap();
        let enrollment_id = enrolled.enrolled[0].id;

        let grade = storage
            .create_grade_impl(CreateGradeRequest {
                enrollment_id,
                year: 2026,
                semester: 1,
                quiz: 7.5,
                assignment: 9.0,
                midsem: 16.0,
                exam: 48.5,
                letter_grade: None,
            })
            .await
            .unwrap();
        assert!((grade.total() - 81.0).abs() < f64::EPSILON);

        let transcript = storage
            .list_grades_by_student_impl(student.id)
            .await
            .unwrap();
        assert_eq!(transcript.len(), 1);
        assert!((transcript[0].total - 81.0).abs() < f64::EPSILON);
        assert_eq!(transcript[0].course.id, course.id);
    }

    #[tokio::test]
    async fn notification_unread_count_and_mark_read() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(user_request("adwoa", UserRole::Student))
            .await
            .unwrap();

        for i in 0..3 {
            storage
                .create_notification_impl(CreateNotificationRequest {
                    user_id: user.id,
                    title: format!("notice {i}"),
                    message: None,
                })
                .await
                .unwrap();
        }

        assert_eq!(
            storage
                .count_unread_notifications_impl(user.id)
                .await
                .unwrap(),
            3
        );

        let list = storage
            .list_notifications_impl(user.id, 1, 10, true)
            .await
            .unwrap();
        let first_id = list.items[0].id;

        assert!(
            storage
                .mark_notification_read_impl(first_id, user.id)
                .await
                .unwrap()
        );
        // 别人的 user_id 标记不生效
        assert!(
            !storage
                .mark_notification_read_impl(first_id, user.id + 999)
                .await
                .unwrap()
        );

        assert_eq!(
            storage
                .count_unread_notifications_impl(user.id)
                .await
                .unwrap(),
            2
        );

        assert_eq!(
            storage
                .mark_all_notifications_read_impl(user.id)
                .await
                .unwrap(),
            2
        );
        assert_eq!(
            storage
                .count_unread_notifications_impl(user.id)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn feedback_list_covers_sent_and_received() {
        let storage = memory_storage().await;
        let author = storage
            .create_user_impl(user_request("abena", UserRole::Student))
            .await
            .unwrap();
        let recipient = storage
            .create_user_impl(user_request("kojo", UserRole::Staff))
            .await
            .unwrap();

        let feedback = storage
            .create_feedback_impl(
                author.id,
                CreateFeedbackRequest {
                    recipient_id: recipient.id,
                    title: "Lab access".to_string(),
                    content: "The evening lab slot is always full".to_string(),
                },
            )
            .await
            .unwrap();

        // 发件人和收件人都能在各自列表里看到这条反馈
        let sent = storage.list_feedback_for_user_impl(author.id).await.unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id, feedback.id);

        let received = storage
            .list_feedback_for_user_impl(recipient.id)
            .await
            .unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].author_id, author.id);

        let unrelated = storage
            .list_feedback_for_user_impl(recipient.id + 999)
            .await
            .unwrap();
        assert!(unrelated.is_empty());
    }

    #[tokio::test]
    async fn exam_question_and_response_flow() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "kwame", "CS0003").await;
        let course = seed_course(&storage, "CS301").await;

        let exam = storage
            .create_exam_impl(CreateExamRequest {
                course_id: course.id,
                exam_name: "Week 3 quiz".to_string(),
                exam_type: ExamType::Quiz,
                start_at: 1_760_000_000,
                due_at: 1_760_003_600,
            })
            .await
            .unwrap();
        // 时间窗口以秒级时间戳原样存取
        assert_eq!(exam.start_at, 1_760_000_000);
        assert_eq!(exam.due_at, 1_760_003_600);

        let question = storage
            .create_question_impl(
                exam.id,
                CreateQuestionRequest {
                    question_type: QuestionType::Mcq,
                    question_text: "2 + 2 = ?".to_string(),
                    answers: vec![
                        CreateAnswerRequest {
                            answer_text: "3".to_string(),
                            is_correct: false,
                        },
                        CreateAnswerRequest {
                            answer_text: "4".to_string(),
                            is_correct: true,
                        },
                    ],
                },
            )
            .await
            .unwrap();
        assert_eq!(question.answers.len(), 2);

        let wrong = question.answers[0].id;
        let right = question.answers[1].id;

        storage
            .submit_response_impl(student.id, question.question.id, wrong)
            .await
            .unwrap();
        // 重复作答覆盖旧选项
        storage
            .submit_response_impl(student.id, question.question.id, right)
            .await
            .unwrap();

        let responses = storage
            .list_responses_by_student_for_exam_impl(student.id, exam.id)
            .await
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].selected_answer_id, right);
    }
}
