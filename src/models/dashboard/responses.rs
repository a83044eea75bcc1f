use crate::models::announcements::entities::Announcement;
use crate::models::enrollments::responses::EnrollmentWithCourse;
use crate::models::exams::entities::Exam;
use serde::Serialize;

// 管理端仪表盘的汇总数字
#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub total_students: u64,
    pub total_staff: u64,
    pub total_courses: u64,
    pub total_departments: u64,
    pub recent_announcements: Vec<Announcement>,
    /// 服务已运行秒数
    pub uptime_seconds: i64,
}

// 学生仪表盘
#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub enrollments: Vec<EnrollmentWithCourse>,
    /// 已选课程中尚未截止的测验
    pub upcoming_exams: Vec<Exam>,
    pub unread_notifications: u64,
    pub recent_announcements: Vec<Announcement>,
}

// 教职工仪表盘
#[derive(Debug, Serialize)]
pub struct StaffDashboard {
    pub course_count: u64,
    pub unread_notifications: u64,
    pub recent_announcements: Vec<Announcement>,
}
