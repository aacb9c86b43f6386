//! # 애플리케이션 컨텍스트
//!
//! 기동 시점에 한 번 조립되어 `web::Data`로 모든 워커에 공유되는 서비스 묶음입니다.
//! 각 서비스는 `Arc`로 감싸져 있어 컨텍스트 복제 비용이 작습니다.
//!
//! ```text
//! AppConfig ──▶ AppContext::bootstrap
//!                 ├─ STORAGE_BACKEND=mongodb → Database + Mongo*Repository (+ 인덱스 생성)
//!                 └─ STORAGE_BACKEND=memory  → InMemory*Repository
//!                         │
//!                         ▼
//!        AuthService / DirectoryService / LinkService / UploadService
//! ```

use std::sync::Arc;
use log::info;
use crate::config::{AppConfig, StorageBackend};
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::links::{InMemoryLinkRepository, MongoLinkRepository};
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository};
use crate::repositories::{LinkRepository, UserRepository};
use crate::services::auth::{AuthService, TokenService};
use crate::services::links::LinkService;
use crate::services::uploads::UploadService;
use crate::services::users::DirectoryService;

/// 요청 핸들러가 공유하는 서비스 컨텍스트
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub directory: Arc<DirectoryService>,
    pub links: Arc<LinkService>,
    pub uploads: Arc<UploadService>,
    storage: StorageBackend,
}

impl AppContext {
    /// 설정에 맞는 저장소를 열고 컨텍스트를 조립합니다.
    ///
    /// MongoDB 백엔드는 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
    pub async fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        match config.database.backend {
            StorageBackend::MongoDb => {
                info!("📡 데이터베이스 연결 중...");
                let database = Database::new(&config.database).await?;

                let users = MongoUserRepository::new(&database);
                let links = MongoLinkRepository::new(&database);
                users.create_indexes().await?;
                links.create_indexes().await?;
                info!("✅ 인덱스 확인 완료");

                Ok(Self::with_repositories(config, Arc::new(users), Arc::new(links)))
            }
            StorageBackend::Memory => {
                info!("🧪 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
                Ok(Self::in_memory(config))
            }
        }
    }

    /// 메모리 저장소로 컨텍스트를 만듭니다.
    pub fn in_memory(config: &AppConfig) -> Self {
        let mut context = Self::with_repositories(
            config,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryLinkRepository::new()),
        );
        context.storage = StorageBackend::Memory;
        context
    }

    /// 주어진 리포지토리로 서비스를 조립합니다.
    pub fn with_repositories(
        config: &AppConfig,
        users: Arc<dyn UserRepository>,
        links: Arc<dyn LinkRepository>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt));

        Self {
            auth: Arc::new(AuthService::new(
                users.clone(),
                tokens.clone(),
                config.password.bcrypt_cost,
            )),
            directory: Arc::new(DirectoryService::new(users.clone())),
            links: Arc::new(LinkService::new(users, links)),
            uploads: Arc::new(UploadService::new(&config.upload)),
            tokens,
            storage: config.database.backend.clone(),
        }
    }

    /// 사용 중인 저장소 종류 (`mongodb` / `memory`)
    pub fn storage(&self) -> &'static str {
        self.storage.as_str()
    }
}
