//! JWT 클레임 모델
//!
//! 모든 토큰은 `{ user: {...}, iat, exp }` 형태의 페이로드를 가집니다.
//! 회원가입 토큰은 `user.id`만, 로그인 토큰은 로그인 시점의 프로필 스냅샷 전체를 담습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims<T> {
    /// 토큰이 나타내는 사용자 정보
    pub user: T,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 회원가입 토큰의 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSubject {
    pub id: String,
}

/// 로그인 토큰 및 로그인 응답에 들어가는 프로필 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub dob: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&User> for LoginProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            dob: user.dob.clone(),
            phone: user.phone.clone(),
            profile_image: user.profile_image.clone(),
            latitude: user.latitude,
            longitude: user.longitude,
        }
    }
}
