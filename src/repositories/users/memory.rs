//! 메모리 기반 사용자 리포지토리
//!
//! 로컬 개발(`STORAGE_BACKEND=memory`)과 테스트용입니다. 프로세스가 종료되면 데이터도 사라집니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, RwLock};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use super::super::{UserRepository, DUPLICATE_USER_MESSAGE};

/// 메모리 사용자 리포지토리
///
/// 삽입 순서를 유지하기 위해 `Vec`에 저장하며, `RwLock`으로 스레드 안전하게 접근합니다.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|e| AppError::InternalError(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|e| AppError::InternalError(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.read()?;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.read()?;
        Ok(users.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        let users = self.read()?;
        Ok(users
            .iter()
            .filter(|user| user.id.as_ref().is_some_and(|id| ids.contains(id)))
            .cloned()
            .collect())
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> AppResult<Vec<User>> {
        let needle = query.to_lowercase();
        let limit = usize::try_from(limit).unwrap_or(0);
        let users = self.read()?;

        Ok(users
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        // 검사와 삽입을 같은 쓰기 락 안에서 수행
        let mut users = self.write()?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update_location(
        &self,
        id: &ObjectId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> AppResult<bool> {
        let mut users = self.write()?;

        match users.iter_mut().find(|user| user.id.as_ref() == Some(id)) {
            Some(user) => {
                user.latitude = latitude;
                user.longitude = longitude;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUserProfile;

    fn user(name: &str, email: &str) -> User {
        User::new(name.to_string(), email.to_string(), "hash".to_string(), NewUserProfile::default())
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("Alice", "alice@example.com")).await.unwrap();
        assert!(created.id.is_some());

        let err = repo.create(user("Other", "alice@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(msg) if msg == "User already exists"));
    }

    #[actix_web::test]
    async fn test_concurrent_registration_only_one_wins() {
        let repo = InMemoryUserRepository::new();

        let (first, second) = futures_util::join!(
            repo.create(user("A", "same@example.com")),
            repo.create(user("B", "same@example.com")),
        );

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
    }

    #[actix_web::test]
    async fn test_search_is_case_insensitive_and_limited() {
        let repo = InMemoryUserRepository::new();
        for i in 0..12 {
            repo.create(user(&format!("Alex {}", i), &format!("alex{}@example.com", i))).await.unwrap();
        }
        repo.create(user("Bob", "bob@example.com")).await.unwrap();

        let found = repo.search_by_name("aLeX", 10).await.unwrap();
        assert_eq!(found.len(), 10);
        assert!(found.iter().all(|u| u.name.starts_with("Alex")));

        assert!(repo.search_by_name("zzz", 10).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_location_overwrites_and_clears() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("Alice", "alice@example.com")).await.unwrap();
        let id = created.id.unwrap();

        assert!(repo.update_location(&id, Some(37.5), Some(127.0)).await.unwrap());
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.latitude, Some(37.5));

        assert!(repo.update_location(&id, None, None).await.unwrap());
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.latitude, None);
        assert_eq!(stored.longitude, None);

        assert!(!repo.update_location(&ObjectId::new(), None, None).await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_ids_skips_unknown() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create(user("Alice", "alice@example.com")).await.unwrap();

        let found = repo.find_by_ids(&[alice.id.unwrap(), ObjectId::new()]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "alice@example.com");
    }
}
