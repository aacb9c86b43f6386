//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션 문서와 1:1로 매핑되며, 필드명은 기존 클라이언트와 맞추기 위해
//! camelCase로 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 회원가입 시 생성되며, 로그인할 때마다 마지막 위치(`latitude`/`longitude`)만 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (검색 대상)
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default)]
    pub address: Option<String>,
    /// 생년월일 (클라이언트가 보낸 문자열 그대로)
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub profile_image: Option<String>,
    /// 마지막 로그인 위치
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// 생성 시간
    pub created_at: DateTime,
}

/// 회원가입 시 저장되는 프로필 정보
#[derive(Debug, Clone, Default)]
pub struct NewUserProfile {
    pub address: Option<String>,
    pub dob: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 저장소가 할당하며, 위치 정보는 첫 로그인 때 채워집니다.
    pub fn new(name: String, email: String, password_hash: String, profile: NewUserProfile) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            address: profile.address,
            dob: profile.dob,
            phone: profile.phone,
            profile_image: profile.profile_image,
            latitude: None,
            longitude: None,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
