//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_smsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SMSystemError {
            $($variant(String),)*
        }

        impl SMSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SMSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SMSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SMSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SMSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SMSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_smsystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl SMSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SMSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SMSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SMSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        SMSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SMSystemError {
    fn from(err: std::io::Error) -> Self {
        SMSystemError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for SMSystemError {
    fn from(err: serde_json::Error) -> Self {
        SMSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SMSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SMSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SMSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SMSystemError::cache_connection("test").code(), "E001");
        assert_eq!(SMSystemError::database_operation("test").code(), "E004");
        assert_eq!(SMSystemError::validation("test").code(), "E005");
        assert_eq!(SMSystemError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SMSystemError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            SMSystemError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SMSystemError::validation("Invalid enrollment date");
        assert_eq!(err.message(), "Invalid enrollment date");
    }

    #[test]
    fn test_from_date_parse() {
        let parse_err = "not-a-date".parse::<chrono::NaiveDate>().unwrap_err();
        let err: SMSystemError = parse_err.into();
        assert_eq!(err.code(), "E008");
    }

    #[test]
    fn test_format_simple() {
        let err = SMSystemError::validation("Invalid index number");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid index number"));
    }
}
