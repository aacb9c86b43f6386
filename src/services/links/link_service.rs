//! # 링크 서비스
//!
//! 사용자 간 링크 생성, 조회, 삭제를 담당합니다.
//!
//! - 중복 판정은 저장된 순서 그대로의 쌍 `(user_id, userId)` 기준입니다. `link(A, B)` 이후
//!   `link(B, A)`는 별개의 링크로 저장됩니다.
//! - 삭제는 링크 ID만으로 이루어지며, 참여자 확인은 하지 않습니다.

use std::collections::HashMap;
use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::users::response::LinkedUserResponse;
use crate::domain::entities::links::Link;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::{LinkRepository, UserRepository};
use crate::utils::object_id::parse_object_id;

const USERS_NOT_FOUND_MESSAGE: &str = "One or both users not found";
const LINK_NOT_FOUND_MESSAGE: &str = "Link not found";

/// 링크 서비스
#[derive(Clone)]
pub struct LinkService {
    users: Arc<dyn UserRepository>,
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    pub fn new(users: Arc<dyn UserRepository>, links: Arc<dyn LinkRepository>) -> Self {
        Self { users, links }
    }

    /// 두 사용자를 링크합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 어느 한쪽 ID가 잘못되었거나 사용자가 없음
    /// * `AppError::ConflictError` - 같은 순서의 링크가 이미 있음
    pub async fn link(&self, user_id: &str, linked_user_id: &str) -> AppResult<Link> {
        let not_found = || AppError::NotFound(USERS_NOT_FOUND_MESSAGE.to_string());
        let user_id = parse_object_id(user_id, not_found)?;
        let linked_user_id = parse_object_id(linked_user_id, not_found)?;

        let (user, linked_user) = futures_util::try_join!(
            self.users.find_by_id(&user_id),
            self.users.find_by_id(&linked_user_id),
        )?;
        if user.is_none() || linked_user.is_none() {
            return Err(not_found());
        }

        let link = self.links.create(Link::new(user_id, linked_user_id)).await?;
        log::info!("🔗 링크 생성: {} -> {}", user_id, linked_user_id);

        Ok(link)
    }

    /// 사용자와 링크된 상대방 목록
    ///
    /// 링크 순서대로 상대방을 반환하며, 이미 삭제된 사용자와 자기 자신은 제외합니다.
    pub async fn list_linked(&self, user_id: &str) -> AppResult<Vec<LinkedUserResponse>> {
        let user_id = parse_object_id(user_id, || {
            AppError::ValidationError("Invalid user ID".to_string())
        })?;

        let links = self.links.find_by_user(&user_id).await?;
        let counterparts: Vec<ObjectId> = links
            .iter()
            .map(|link| link.counterpart_of(&user_id))
            .filter(|id| id != &user_id)
            .collect();

        let users: HashMap<ObjectId, User> = self.users
            .find_by_ids(&counterparts)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        // 같은 상대와 양방향 링크가 있으면 링크마다 한 번씩 나타납니다.
        Ok(counterparts
            .iter()
            .filter_map(|id| users.get(id).cloned())
            .map(LinkedUserResponse::from)
            .collect())
    }

    /// 링크 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - ID 형식이 잘못되었거나 삭제된 링크가 없음
    pub async fn unlink(&self, link_id: &str) -> AppResult<()> {
        let not_found = || AppError::NotFound(LINK_NOT_FOUND_MESSAGE.to_string());
        let link_id = parse_object_id(link_id, not_found)?;

        if !self.links.delete(&link_id).await? {
            return Err(not_found());
        }

        log::info!("✂️ 링크 삭제: {}", link_id);
        Ok(())
    }
}
