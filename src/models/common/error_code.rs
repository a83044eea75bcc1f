// 业务错误码，响应体中的 code 字段使用这里的数值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用 HTTP 语义
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    // 认证
    AuthFailed = 1001,
    RegisterFailed = 1002,

    // 用户
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserNameAlreadyExists = 2003,
    UserEmailAlreadyExists = 2004,
    UserNameInvalid = 2005,
    UserEmailInvalid = 2006,
    UserPasswordInvalid = 2007,
    UserCreationFailed = 2008,
    UserUpdateFailed = 2009,
    UserDeleteFailed = 2010,
    CanNotDeleteCurrentUser = 2011,

    // 学生
    StudentNotFound = 3001,
    StudentAlreadyExists = 3002,
    IndexNumberInvalid = 3003,
    IndexNumberAlreadyExists = 3004,

    // 教职工
    StaffNotFound = 3101,
    StaffNumberAlreadyExists = 3102,

    // 课程与课表
    CourseNotFound = 4001,
    CourseCodeAlreadyExists = 4002,
    ScheduleNotFound = 4101,

    // 选课
    EnrollmentNotFound = 4201,
    AlreadyEnrolled = 4202,
    EnrollmentFailed = 4203,

    // 组织结构
    DepartmentNotFound = 5001,
    ProgramNotFound = 5002,
    HallNotFound = 5003,

    // 成绩
    GradeNotFound = 6001,
    GradeAlreadyExists = 6002,
    ScoreInvalid = 6003,

    // 考试
    ExamNotFound = 7001,
    QuestionNotFound = 7002,
    AnswerNotFound = 7003,
    ResponseNotFound = 7004,

    // 消息
    NotificationNotFound = 8001,
    AnnouncementNotFound = 8101,
    FeedbackNotFound = 8201,

    // 报表
    ReportNotFound = 9001,
}
