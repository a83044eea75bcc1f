pub mod auth;

pub mod users;

pub mod students;

pub mod staff;

pub mod courses;

pub mod org;

pub mod grades;

pub mod exams;

pub mod notifications;

pub mod announcements;

pub mod feedback;

pub mod reports;

pub mod dashboard;

pub use announcements::configure_announcement_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use feedback::configure_feedback_routes;
pub use grades::configure_grade_routes;
pub use notifications::configure_notification_routes;
pub use org::configure_org_routes;
pub use reports::configure_report_routes;
pub use staff::configure_staff_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
