//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`], [`LinkRepository`] trait에만 의존하고,
//! 실제 저장소는 기동 시점에 설정(`STORAGE_BACKEND`)에 따라 선택됩니다.
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`users::MongoUserRepository`], [`links::MongoLinkRepository`] | 운영 (MongoDB) |
//! | [`users::InMemoryUserRepository`], [`links::InMemoryLinkRepository`] | 로컬 개발, 테스트 |
//!
//! # 유니크 제약
//!
//! 중복 판정은 저장소가 직접 보장합니다. MongoDB는 유니크 인덱스 위반(11000)을,
//! 메모리 구현은 하나의 쓰기 락 안에서 검사와 삽입을 함께 수행하여
//! 동시에 들어온 요청 중 하나만 성공하도록 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{users::InMemoryUserRepository, UserRepository};
//!
//! let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod links;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::links::Link;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 이메일 중복 시 에러 메시지
pub const DUPLICATE_USER_MESSAGE: &str = "User already exists";
/// 같은 순서의 링크 중복 시 에러 메시지
pub const DUPLICATE_LINK_MESSAGE: &str = "Users are already linked";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 여러 ID의 사용자를 한 번에 조회합니다. 없는 ID는 결과에서 빠집니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    /// 이름에 `query`가 포함된 사용자를 대소문자 구분 없이 최대 `limit`명 조회합니다.
    async fn search_by_name(&self, query: &str, limit: i64) -> AppResult<Vec<User>>;

    /// 새 사용자 저장
    ///
    /// 이메일이 이미 있으면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 마지막 위치를 덮어씁니다. 사용자가 없으면 `false`.
    async fn update_location(
        &self,
        id: &ObjectId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> AppResult<bool>;
}

/// 링크 저장소
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// 새 링크 저장
    ///
    /// 같은 순서의 `(user_id, userId)` 쌍이 이미 있으면 `ConflictError`를 반환합니다.
    async fn create(&self, link: Link) -> AppResult<Link>;

    /// 주어진 사용자가 어느 쪽이든 참여하는 링크를 생성 순으로 조회합니다.
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Link>>;

    /// ID로 링크 삭제. 삭제된 문서가 없으면 `false`.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 유니크 인덱스 위반 여부
pub(crate) fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
