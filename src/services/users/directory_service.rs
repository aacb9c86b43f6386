//! # 사용자 디렉터리 서비스
//!
//! 이름 검색과 ID 조회를 담당합니다. 반환값은 모두 [`UserResponse`]로 변환되어
//! 비밀번호 해시가 응답에 포함되지 않습니다.

use std::sync::Arc;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;
use crate::utils::object_id::parse_object_id;

/// 검색 결과 최대 개수
pub const SEARCH_LIMIT: i64 = 10;

/// 사용자 디렉터리 서비스
#[derive(Clone)]
pub struct DirectoryService {
    users: Arc<dyn UserRepository>,
}

impl DirectoryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// 이름 부분 일치 검색 (대소문자 무시, 최대 [`SEARCH_LIMIT`]명)
    ///
    /// `query`는 호출 전에 공백 검사가 끝난 값이어야 합니다.
    pub async fn search(&self, query: &str) -> AppResult<Vec<UserResponse>> {
        let users = self.users.search_by_name(query, SEARCH_LIMIT).await?;
        log::debug!("사용자 검색 '{}': {}건", query, users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ObjectId 형식이 아님
    /// * `AppError::NotFound` - 해당 사용자 없음
    pub async fn get_by_id(&self, user_id: &str) -> AppResult<UserResponse> {
        let id = parse_object_id(user_id, || {
            AppError::ValidationError("Invalid user ID".to_string())
        })?;

        self.users
            .find_by_id(&id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
