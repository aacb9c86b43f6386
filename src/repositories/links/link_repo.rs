//! # 링크 리포지토리 구현 (MongoDB)
//!
//! `links` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 인덱스
//!
//! - `user_pair_unique`: `(user_id, userId)` 복합 유니크. 같은 순서의 중복 링크를 저장소 수준에서 차단합니다.
//! - `user_id`, `linked_user_id`: 양방향 조회(`$or`)용 단일 필드 인덱스

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::links::Link;
use crate::errors::{AppError, AppResult};
use super::super::{is_duplicate_key_error, LinkRepository, DUPLICATE_LINK_MESSAGE};

/// MongoDB 링크 리포지토리
#[derive(Clone)]
pub struct MongoLinkRepository {
    collection: Collection<Link>,
}

impl MongoLinkRepository {
    /// 컬렉션 이름
    pub const COLLECTION: &'static str = "links";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Link>(Self::COLLECTION),
        }
    }

    /// 필요한 인덱스를 생성합니다.
    ///
    /// 이미 중복 링크가 저장되어 있으면 유니크 인덱스 생성이 실패하며, 기동 에러로 처리됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "userId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_pair_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        let linked_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .name("linked_user_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([pair_index, user_index, linked_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn create(&self, mut link: Link) -> AppResult<Link> {
        let result = self.collection
            .insert_one(&link)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError(DUPLICATE_LINK_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 링크 ID가 ObjectId가 아닙니다".to_string())
        })?;
        link.id = Some(id);

        Ok(link)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Link>> {
        let cursor = self.collection
            .find(doc! { "$or": [ { "user_id": *user_id }, { "userId": *user_id } ] })
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
