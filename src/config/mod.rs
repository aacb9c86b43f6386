//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`] 하나로 모아
//! 기동 시점에 한 번 구성하고, 이후에는 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 업로드, 레이트 리밋, CORS 설정
//! - [`auth_config`] - JWT 설정
//!
//! ## 설계 원칙
//!
//! - 전역 상태 없음: 설정은 [`AppConfig::from_env`]로 만들어 서비스에 넘깁니다.
//! - 필수값 누락(`JWT_SECRET`)이나 숫자 파싱 실패는 기동 시점 에러입니다.
//! - [`AppConfig::from_lookup`]은 임의의 키-값 조회 함수를 받으므로
//!   테스트에서 환경 변수를 건드리지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택 (기본값)
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//! export STORAGE_BACKEND="mongodb"        # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_link_dev"
//! export JWT_EXPIRATION_HOURS="1"
//! export ENVIRONMENT="production"         # development, test, staging, production
//! export BCRYPT_COST="12"                 # 4-15 범위
//! export UPLOAD_DIR="public/uploads"
//! export UPLOAD_MAX_BYTES="5242880"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;
use thiserror::Error;

/// 설정 키를 값으로 조회하는 함수
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 설정 로딩 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("필수 환경 변수가 없습니다: {0}")]
    Missing(&'static str),

    #[error("{key} 값이 올바르지 않습니다 ({value}): {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub upload: UploadConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::detect(lookup);
        let password = PasswordConfig::load(lookup, &environment)?;

        Ok(Self {
            server: ServerConfig::load(lookup)?,
            database: DatabaseConfig::load(lookup)?,
            jwt: JwtConfig::load(lookup)?,
            password,
            upload: UploadConfig::load(lookup)?,
            rate_limit: RateLimitConfig::load(lookup)?,
            cors: CorsConfig::load(lookup),
            environment,
        })
    }
}

/// 값이 있으면 파싱하고, 없으면 기본값을 사용합니다.
pub(crate) fn parse_or<T>(lookup: &Lookup<'_>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
