//! # 인증 서비스
//!
//! 회원가입과 로그인을 담당합니다.
//!
//! ## 보안 특징
//!
//! - **bcrypt 해싱**: 환경별 cost 설정 (`BCRYPT_COST`)
//! - **중복 이메일 방지**: 사전 조회 + 저장소 유니크 제약 (동시 요청까지 차단)
//! - **열거 공격 방지**: 없는 이메일과 틀린 비밀번호가 같은 응답을 받습니다.

use std::sync::Arc;
use std::time::Instant;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{LoginResponse, RegisterResponse};
use crate::domain::entities::users::User;
use crate::domain::models::token::LoginProfile;
use crate::errors::{AppError, AppResult};
use crate::repositories::{UserRepository, DUPLICATE_USER_MESSAGE};
use super::TokenService;

/// 인증 서비스
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self { users, tokens, bcrypt_cost }
    }

    /// 신규 사용자 등록
    ///
    /// 1. 이메일 중복 확인
    /// 2. 비밀번호 bcrypt 해싱
    /// 3. 사용자 저장 (동시 가입은 유니크 인덱스가 걸러냄)
    /// 4. `{ user: { id } }` 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 해싱/토큰 생성 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let start_time = Instant::now();

        if self.users.find_by_email(&request.email).await?.is_some() {
            log::info!("중복 이메일 가입 시도: {}", request.email);
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let profile = request.profile();
        let user = User::new(request.name, request.email, password_hash, profile);
        let saved = self.users.create(user).await?;

        let token = self.tokens.issue_register_token(&saved)?;

        log::info!("✅ 회원가입 완료: {} ({:?})", saved.email, start_time.elapsed());

        Ok(RegisterResponse { token })
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공 시 전달받은 위치를 저장하고(값이 없으면 기존 값도 지움),
    /// 갱신된 프로필 스냅샷으로 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 이메일이 없거나 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let start_time = Instant::now();

        let Some(mut user) = self.users.find_by_email(&request.email).await? else {
            log::info!("로그인 실패 (미가입 이메일): {}", request.email);
            return Err(AppError::InvalidCredentials);
        };

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패 (비밀번호 불일치): {}", request.email);
            return Err(AppError::InvalidCredentials);
        }

        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string())
        })?;

        self.users
            .update_location(&id, request.latitude, request.longitude)
            .await?;
        user.latitude = request.latitude;
        user.longitude = request.longitude;

        let profile = LoginProfile::from(&user);
        let token = self.tokens.issue_login_token(&profile)?;

        log::info!("✅ 로그인 성공: {} ({:?})", user.email, start_time.elapsed());

        Ok(LoginResponse { token, user: profile })
    }
}
