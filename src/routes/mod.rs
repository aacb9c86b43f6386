//! API 라우트 설정 모듈
//!
//! 모든 기능 엔드포인트는 `/api/auth` 스코프 아래에 있습니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/auth/register` | [`handlers::auth::register`] |
//! | POST | `/api/auth/login` | [`handlers::auth::login`] |
//! | POST | `/api/auth/upload` | [`handlers::uploads::upload_image`] |
//! | GET | `/api/auth/search` | [`handlers::users::search_users`] |
//! | GET | `/api/auth/userById` | [`handlers::users::get_user_by_id`] |
//! | POST | `/api/auth/link` | [`handlers::links::link_users`] |
//! | GET | `/api/auth/linkedUsers` | [`handlers::links::linked_users`] |
//! | POST | `/api/auth/unlink` | [`handlers::links::unlink_users`] |
//! | GET | `/health` | 헬스체크 |
//! | GET | `/public/uploads/{file}` | 업로드 파일 (정적) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let context = web::Data::new(AppContext::bootstrap(&config).await?);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &context));
//! ```

use actix_files::Files;
use actix_web::{error, get, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::AppContext;
use crate::errors::AppError;
use crate::handlers;
use crate::services::uploads::PUBLIC_UPLOAD_PATH;

/// 모든 라우트와 공유 데이터를 등록합니다.
///
/// JSON 본문이나 쿼리 문자열 파싱 실패는 `400 {"message": ...}`로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, context: &web::Data<AppContext>) {
    cfg.app_data(context.clone())
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(health_check);
    configure_auth_routes(cfg);

    cfg.service(Files::new(PUBLIC_UPLOAD_PATH, context.uploads.dir()));
}

/// `/api/auth` 스코프
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            // 계정
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::uploads::upload_image)
            // 디렉터리
            .service(handlers::users::search_users)
            .service(handlers::users::get_user_by_id)
            // 링크
            .service(handlers::links::link_users)
            .service(handlers::links::linked_users)
            .service(handlers::links::unlink_users)
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_link_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "storage": "mongodb"
/// }
/// ```
#[get("/health")]
async fn health_check(context: web::Data<AppContext>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": context.storage(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;
    use crate::test_utils::{memory_context, test_app};

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let (context, _dir) = memory_context();
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::get().uri("/health").to_request();
        let value: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(value["status"], "healthy");
        assert_eq!(value["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request_with_message() {
        let (context, _dir) = memory_context();
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = serde_json::from_slice(&actix_test::read_body(response).await).unwrap();
        assert!(value["message"].is_string());
    }
}
