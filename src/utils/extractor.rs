use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

// 路径参数安全提取器：解析失败时直接返回统一格式的 400 响应，
// 避免 actix 默认的纯文本错误页
macro_rules! safe_path_i64 {
    ($name:ident, $key:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($key)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid path parameter: ", $key),
                        ));
                        Err(InternalError::from_response("invalid path id", response).into())
                    }
                })
            }
        }
    };
}

safe_path_i64!(SafeIDI64, "id");
safe_path_i64!(SafeCourseIdI64, "course_id");
safe_path_i64!(SafeEnrollmentIdI64, "enrollment_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn parses_positive_id() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-3", "9999999999999999999999"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());
        }
    }
}
