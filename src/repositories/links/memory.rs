//! 메모리 기반 링크 리포지토리

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, RwLock};
use crate::domain::entities::links::Link;
use crate::errors::{AppError, AppResult};
use super::super::{LinkRepository, DUPLICATE_LINK_MESSAGE};

/// 메모리 링크 리포지토리
///
/// 생성 순서를 유지하며, 중복 검사와 삽입은 하나의 쓰기 락 안에서 이루어집니다.
#[derive(Clone, Default)]
pub struct InMemoryLinkRepository {
    links: Arc<RwLock<Vec<Link>>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, mut link: Link) -> AppResult<Link> {
        let mut links = self
            .links
            .write()
            .map_err(|e| AppError::InternalError(format!("Failed to acquire write lock: {}", e)))?;

        if links.iter().any(|existing| existing.same_ordered_pair(&link)) {
            return Err(AppError::ConflictError(DUPLICATE_LINK_MESSAGE.to_string()));
        }

        link.id = Some(ObjectId::new());
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Link>> {
        let links = self
            .links
            .read()
            .map_err(|e| AppError::InternalError(format!("Failed to acquire read lock: {}", e)))?;

        Ok(links.iter().filter(|link| link.involves(user_id)).cloned().collect())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut links = self
            .links
            .write()
            .map_err(|e| AppError::InternalError(format!("Failed to acquire write lock: {}", e)))?;

        let before = links.len();
        links.retain(|link| link.id.as_ref() != Some(id));

        Ok(links.len() < before)
    }
}
