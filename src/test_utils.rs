//! 테스트 공용 헬퍼
//!
//! 메모리 저장소와 임시 업로드 디렉터리로 실제와 같은 라우트 구성을 만듭니다.

use std::collections::HashMap;
use std::path::Path;
use actix_web::{web, App};
use tempfile::TempDir;
use crate::config::AppConfig;
use crate::core::AppContext;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::models::token::TokenSubject;
use crate::routes::configure_all_routes;

/// 테스트 설정 (`ENVIRONMENT=test`, bcrypt cost 4)
pub fn test_config(upload_dir: &Path) -> AppConfig {
    let upload_dir = upload_dir.to_string_lossy().to_string();
    let vars: HashMap<&str, String> = [
        ("JWT_SECRET", "test-secret".to_string()),
        ("ENVIRONMENT", "test".to_string()),
        ("STORAGE_BACKEND", "memory".to_string()),
        ("UPLOAD_DIR", upload_dir),
    ]
    .into_iter()
    .collect();

    AppConfig::from_lookup(&|key: &str| vars.get(key).cloned())
        .expect("test config")
}

/// 메모리 저장소 컨텍스트. 업로드 디렉터리는 반환된 `TempDir`이 살아 있는 동안 유지됩니다.
pub fn memory_context() -> (AppContext, TempDir) {
    let dir = tempfile::tempdir().expect("temp upload dir");
    let context = AppContext::in_memory(&test_config(dir.path()));
    (context, dir)
}

/// 서비스 계층으로 사용자를 등록하고 ID를 반환합니다.
pub async fn seed_user(context: &AppContext, name: &str, email: &str) -> String {
    let response = context
        .auth
        .register(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            address: None,
            dob: None,
            phone: None,
            profile_image: None,
        })
        .await
        .expect("seed user");

    context
        .tokens
        .verify::<TokenSubject>(&response.token)
        .expect("register token")
        .user
        .id
}

pub fn test_app(
    context: AppContext,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let context = web::Data::new(context);
    App::new().configure(|cfg| configure_all_routes(cfg, &context))
}
