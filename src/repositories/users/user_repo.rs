//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크 (동시 회원가입 중복 방지)
//! - `name_asc`: 이름 검색용

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use super::super::{is_duplicate_key_error, UserRepository, DUPLICATE_USER_MESSAGE};

/// MongoDB 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let found = repo.find_by_email("alice@example.com").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// 컬렉션 이름
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 필요한 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> AppResult<Vec<User>> {
        // 정규식 메타문자는 그대로 매칭되도록 escape
        let pattern = regex::escape(query);

        let cursor = self.collection
            .find(doc! { "name": { "$regex": pattern, "$options": "i" } })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update_location(
        &self,
        id: &ObjectId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> AppResult<bool> {
        let result = self.collection
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "latitude": latitude, "longitude": longitude } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}
