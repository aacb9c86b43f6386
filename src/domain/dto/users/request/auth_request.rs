//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::NewUserProfile;
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 요청 구조체
///
/// `name`, `email`, `password`는 필수이고 나머지 프로필 필드는 선택입니다.
/// 공백만 있는 선택 필드는 저장하지 않습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub dob: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile_image: Option<String>,
}

impl RegisterRequest {
    /// 저장할 프로필 정보만 분리합니다.
    pub fn profile(&self) -> NewUserProfile {
        NewUserProfile {
            address: self.address.clone(),
            dob: self.dob.clone(),
            phone: self.phone.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}

/// 로그인 요청 구조체
///
/// 위치 정보는 선택이며, 보내지 않으면 저장된 위치가 비워집니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    #[serde(default)]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    #[serde(default)]
    pub longitude: Option<f64>,
}
