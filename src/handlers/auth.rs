//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트입니다.
//!
//! - `POST /api/auth/register` → `201 { token }`
//! - `POST /api/auth/login` → `200 { token, user }`
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::AppContext;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::errors::AppError;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
///
/// # Request Body
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "password123",
///   "address": "Seoul",
///   "dob": "1990-01-01",
///   "phone": "010-0000-0000",
///   "profileImage": "http://localhost:8080/public/uploads/1718000000000.png"
/// }
/// ```
#[post("/register")]
pub async fn register(
    context: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = context.auth.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 없는 이메일과 틀린 비밀번호 모두 `400 {"message":"Invalid Credentials"}`로 응답합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = context.auth.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
