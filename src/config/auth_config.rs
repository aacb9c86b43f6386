//! 인증 관련 설정
//!
//! JWT 서명 비밀키와 토큰 유효 시간을 관리합니다.

use super::{parse_or, ConfigError, Lookup};

/// JWT 서명 설정
///
/// `JWT_SECRET`은 필수입니다. 누락되면 서버가 기동되지 않습니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 토큰 유효 시간 (시간 단위)
    pub expiration_hours: i64,
}

/// 토큰 유효 기간 상한 (1년)
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

impl JwtConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiration_hours = parse_or(lookup, "JWT_EXPIRATION_HOURS", 1)?;
        if !(1..=MAX_EXPIRATION_HOURS).contains(&expiration_hours) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                value: expiration_hours.to_string(),
                reason: format!("1-{} 범위여야 합니다", MAX_EXPIRATION_HOURS),
            });
        }

        Ok(Self { secret, expiration_hours })
    }
}

// 비밀키가 로그에 찍히지 않도록 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
