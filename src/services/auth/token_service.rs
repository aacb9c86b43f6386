//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JWT를 발급하고 검증합니다. 페이로드는 항상 `{ user, iat, exp }` 형태이며,
//! `user` 자리에 회원가입 시에는 [`TokenSubject`], 로그인 시에는 [`LoginProfile`]이 들어갑니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::token::{LoginProfile, TokenClaims, TokenSubject};
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// 키는 생성 시점에 한 번만 만들어 재사용합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// 회원가입 토큰 발급 (`{ user: { id } }`)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은(ID 없는) 사용자이거나 서명 실패
    pub fn issue_register_token(&self, user: &User) -> AppResult<String> {
        let id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        self.issue(TokenSubject { id })
    }

    /// 로그인 토큰 발급 (로그인 시점 프로필 스냅샷 포함)
    pub fn issue_login_token(&self, profile: &LoginProfile) -> AppResult<String> {
        self.issue(profile)
    }

    /// 임의의 사용자 페이로드로 토큰을 발급합니다.
    ///
    /// 만료 시각을 표현할 수 없으면 패닉 대신 `AppError::InternalError`를 반환합니다.
    pub fn issue<T: Serialize>(&self, user: T) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = Duration::try_hours(self.expiration_hours)
            .and_then(|expiration| now.checked_add_signed(expiration))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "토큰 만료 시각을 계산할 수 없습니다: {}시간",
                    self.expiration_hours
                ))
            })?;

        let claims = TokenClaims {
            user,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        self.sign(&claims)
    }

    fn sign<T: Serialize>(&self, claims: &TokenClaims<T>) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서버 라우트는 토큰을 요구하지 않으므로, 발급한 토큰을 클라이언트 쪽에서
    /// 해석하는 방식과 동일하게 검증할 때(테스트 포함) 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims: TokenClaims<LoginProfile> = token_service.verify(&token)?;
    /// println!("User: {}", claims.user.email);
    /// ```
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> AppResult<TokenClaims<T>> {
        use jsonwebtoken::errors::ErrorKind;

        decode::<TokenClaims<T>>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => {
                    AppError::AuthenticationError("Invalid token".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }
}
