//! Link Entity Implementation
//!
//! 두 사용자 사이의 연결 관계를 나타내는 엔티티입니다.
//! `links` 컬렉션에 `{ _id, user_id, userId, createdAt }` 형태로 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 링크 엔티티
///
/// 순서가 있는 쌍 `(user_id, userId)`로 저장합니다. 조회는 양방향이지만
/// 중복 판정은 저장된 순서 그대로의 쌍에 대해서만 이루어집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 링크를 요청한 사용자
    pub user_id: ObjectId,
    /// 링크 대상 사용자
    #[serde(rename = "userId")]
    pub linked_user_id: ObjectId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

impl Link {
    pub fn new(user_id: ObjectId, linked_user_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            linked_user_id,
            created_at: DateTime::now(),
        }
    }

    /// 주어진 사용자가 이 링크의 어느 쪽이든 참여하는지 확인
    pub fn involves(&self, user: &ObjectId) -> bool {
        &self.user_id == user || &self.linked_user_id == user
    }

    /// 주어진 사용자 기준으로 반대편 사용자 ID를 반환합니다.
    ///
    /// 자기 자신과의 링크라면 자기 자신이 반환됩니다.
    pub fn counterpart_of(&self, user: &ObjectId) -> ObjectId {
        if &self.user_id == user {
            self.linked_user_id
        } else {
            self.user_id
        }
    }

    /// 같은 순서의 쌍인지 확인
    pub fn same_ordered_pair(&self, other: &Link) -> bool {
        self.user_id == other.user_id && self.linked_user_id == other.linked_user_id
    }
}
