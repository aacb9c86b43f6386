//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 업로드, 레이트 리밋 및 CORS 관련 설정을 관리합니다.
//! 모든 설정은 [`super::Lookup`]을 통해 읽어 오므로 테스트에서는
//! 실제 환경 변수 대신 맵을 넘길 수 있습니다.

use std::path::PathBuf;
use super::{parse_or, ConfigError, Lookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 값을 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn detect(lookup: &Lookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub(crate) fn load(lookup: &Lookup<'_>, environment: &Environment) -> Result<Self, ConfigError> {
        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                    key: "BCRYPT_COST",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if !(4..=15).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value: raw,
                        reason: "4-15 범위여야 합니다".to_string(),
                    });
                }
                cost
            }
            None => Self::bcrypt_cost_for_env(environment),
        };

        Ok(Self { bcrypt_cost })
    }

    /// 환경별 기본 bcrypt cost
    ///
    /// 개발/테스트 환경은 빠른 응답을 위해 최소 cost를 사용합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let workers: usize = parse_or(lookup, "SERVER_WORKERS", 4)?;
        if workers == 0 {
            return Err(ConfigError::Invalid {
                key: "SERVER_WORKERS",
                value: workers.to_string(),
                reason: "1 이상이어야 합니다".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "PORT", 8080)?,
            workers,
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 개발 및 테스트용, 재시작 시 초기화)
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub uri: String,
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let backend = match lookup("STORAGE_BACKEND") {
            None => StorageBackend::MongoDb,
            Some(raw) => match raw.to_lowercase().as_str() {
                "mongodb" | "mongo" => StorageBackend::MongoDb,
                "memory" | "in-memory" => StorageBackend::Memory,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "STORAGE_BACKEND",
                        value: raw,
                        reason: "mongodb 또는 memory 중 하나여야 합니다".to_string(),
                    });
                }
            },
        };

        Ok(Self {
            backend,
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| "user_link_dev".to_string()),
        })
    }
}

/// 프로필 이미지 업로드 설정
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 업로드 파일이 저장되고 `/public/uploads`로 그대로 서빙되는 디렉터리
    pub dir: PathBuf,
    /// 파일 하나의 최대 크기 (바이트)
    pub max_bytes: usize,
}

impl UploadConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/uploads")),
            max_bytes: parse_or(lookup, "UPLOAD_MAX_BYTES", 5 * 1024 * 1024)?,
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100)?,
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
        })
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub(crate) fn load(lookup: &Lookup<'_>) -> Self {
        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        };

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_out_of_range_is_rejected() {
        let vars = lookup_from(&[("BCRYPT_COST", "31")]);
        let lookup = |key: &str| vars.get(key).cloned();

        let result = PasswordConfig::load(&lookup, &Environment::Production);
        assert!(matches!(result, Err(ConfigError::Invalid { key: "BCRYPT_COST", .. })));
    }

    #[test]
    fn test_server_config_defaults() {
        let vars = lookup_from(&[]);
        let lookup = |key: &str| vars.get(key).cloned();

        let server = ServerConfig::load(&lookup).unwrap();
        assert_eq!(server.bind_address(), "127.0.0.1:8080");
        assert_eq!(server.workers, 4);
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let vars = lookup_from(&[("SERVER_WORKERS", "0")]);
        let lookup = |key: &str| vars.get(key).cloned();

        let result = ServerConfig::load(&lookup);
        assert!(matches!(result, Err(ConfigError::Invalid { key: "SERVER_WORKERS", .. })));
    }

    #[test]
    fn test_storage_backend_parsing() {
        let vars = lookup_from(&[("STORAGE_BACKEND", "Memory")]);
        let lookup = |key: &str| vars.get(key).cloned();
        assert_eq!(DatabaseConfig::load(&lookup).unwrap().backend, StorageBackend::Memory);

        let vars = lookup_from(&[("STORAGE_BACKEND", "postgres")]);
        let lookup = |key: &str| vars.get(key).cloned();
        assert!(DatabaseConfig::load(&lookup).is_err());
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let vars = lookup_from(&[("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,")]);
        let lookup = |key: &str| vars.get(key).cloned();

        let cors = CorsConfig::load(&lookup);
        assert_eq!(cors.allowed_origins, vec!["https://a.example", "https://b.example"]);
    }
}
