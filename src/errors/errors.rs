//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"message": <메시지>}` |
//! | `ConflictError` | 400 Bad Request | `{"message": <메시지>}` |
//! | `InvalidCredentials` | 400 Bad Request | `{"message": "Invalid Credentials"}` |
//! | `AuthenticationError` | 401 Unauthorized | `{"message": <메시지>}` |
//! | `NotFound` | 404 Not Found | `{"message": <메시지>}` |
//! | `DatabaseError` / `StorageError` / `InternalError` | 500 | `{"message": "Server error"}` |
//!
//! 500 계열은 상세 내용을 서버 로그에만 남기고 클라이언트에는 고정 메시지를 돌려줍니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find(repo: &dyn UserRepository, id: &ObjectId) -> AppResult<User> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 500 응답에 사용하는 고정 메시지
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 파일 저장소 관련 에러 (500 Internal Server Error)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 중복 에러 (400 Bad Request)
    ///
    /// 중복 이메일, 중복 링크 모두 기존 클라이언트 계약에 맞춰 400으로 응답합니다.
    #[error("{0}")]
    ConflictError(String),

    /// 로그인 실패 (400 Bad Request)
    ///
    /// 존재하지 않는 이메일과 잘못된 비밀번호를 구분하지 않습니다.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// 토큰 인증 실패 에러 (401 Unauthorized)
    ///
    /// `TokenService::verify` 전용입니다. 현재 라우트 중 토큰을 요구하는 곳은 없습니다.
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 서버 내부 에러 여부
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// 클라이언트에 노출해도 되는 메시지
    ///
    /// 500 계열은 항상 [`SERVER_ERROR_MESSAGE`]를 반환합니다.
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    fn log_if_server_error(&self) {
        if self.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_)
            | AppError::StorageError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        self.log_if_server_error();

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "message": self.public_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 본문을 `text/plain`으로 내보내는 에러 래퍼
///
/// 디렉터리 조회 엔드포인트는 일부 에러를 평문으로 응답합니다.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PlainTextError(pub AppError);

impl ResponseError for PlainTextError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log_if_server_error();

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.0.public_message())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
