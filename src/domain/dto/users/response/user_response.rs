use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;
use crate::domain::models::token::LoginProfile;

/// 공개 사용자 응답
///
/// 사용자 문서에서 비밀번호 해시를 제외한 필드만 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
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

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            address,
            dob,
            phone,
            profile_image,
            latitude,
            longitude,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            address,
            dob,
            phone,
            profile_image,
            latitude,
            longitude,
        }
    }
}

/// 링크된 사용자 응답 (이름과 프로필 이미지만 투영)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedUserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub profile_image: Option<String>,
}

impl From<User> for LinkedUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name,
            profile_image: user.profile_image,
        }
    }
}

/// 회원가입 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

/// 로그인 응답
///
/// `user`는 토큰 페이로드에 들어간 프로필 스냅샷과 동일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginProfile,
}
