//! User Directory HTTP Handlers
//!
//! 사용자 검색과 ID 조회 엔드포인트입니다.
//! 필수 파라미터 누락은 평문(`text/plain`)으로 응답합니다.

use actix_web::{get, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::dto::users::request::{SearchQuery, UserIdQuery};
use crate::errors::PlainTextError;
use crate::utils::string_utils::{require_non_blank, require_param};

/// 이름 검색
///
/// # Endpoint
/// `GET /api/auth/search?q={query}`
///
/// 서버 오류도 평문 `Server error`로 응답합니다.
#[get("/search")]
pub async fn search_users(
    context: web::Data<AppContext>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, PlainTextError> {
    let q = require_non_blank(query.q.as_deref(), "Query parameter is required")
        .map_err(PlainTextError)?;

    let users = context.directory.search(q).await.map_err(PlainTextError)?;

    Ok(HttpResponse::Ok().json(users))
}

/// ID로 사용자 조회
///
/// # Endpoint
/// `GET /api/auth/userById?userId={id}`
#[get("/userById")]
pub async fn get_user_by_id(
    context: web::Data<AppContext>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = require_param(query.user_id.as_deref(), "User ID parameter is required")
        .map_err(PlainTextError)?;

    let user = context.directory.get_by_id(user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;
    use crate::test_utils::{memory_context, seed_user, test_app};

    #[rstest]
    #[case::missing("/api/auth/search")]
    #[case::empty("/api/auth/search?q=")]
    #[case::blank("/api/auth/search?q=%20%20")]
    #[actix_web::test]
    async fn test_search_requires_query(#[case] uri: &str) {
        let (context, _dir) = memory_context();
        let app = actix_test::init_service(test_app(context)).await;

        let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(actix_test::read_body(response).await, "Query parameter is required");
    }

    #[actix_web::test]
    async fn test_search_hides_password_and_matches_case_insensitively() {
        let (context, _dir) = memory_context();
        seed_user(&context, "Alice", "alice@example.com").await;
        seed_user(&context, "Bob", "bob@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::get().uri("/api/auth/search?q=AL").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_slice(&actix_test::read_body(response).await).unwrap();
        let users = value.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "Alice");
        assert!(users[0].get("password").is_none());
        assert!(users[0]["_id"].is_string());
    }

    #[actix_web::test]
    async fn test_search_keeps_leading_space_in_query() {
        let (context, _dir) = memory_context();
        seed_user(&context, "John Smith", "john@example.com").await;
        seed_user(&context, "Smithers", "smithers@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::get().uri("/api/auth/search?q=%20smith").to_request();
        let value: Value = actix_test::call_and_read_body_json(&app, request).await;

        let users = value.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "John Smith");
    }

    #[actix_web::test]
    async fn test_user_by_id_responses() {
        let (context, _dir) = memory_context();
        let id = seed_user(&context, "Alice", "alice@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::get().uri(&format!("/api/auth/userById?userId={}", id)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let user: Value = serde_json::from_slice(&actix_test::read_body(response).await).unwrap();
        assert_eq!(user["email"], "alice@example.com");
        assert!(user.get("password").is_none());

        let request = actix_test::TestRequest::get().uri("/api/auth/userById").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(actix_test::read_body(response).await, "User ID parameter is required");

        let request = actix_test::TestRequest::get()
            .uri("/api/auth/userById?userId=000000000000000000000000")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(actix_test::read_body(response).await, r#"{"message":"User not found"}"#);

        let request = actix_test::TestRequest::get().uri("/api/auth/userById?userId=xyz").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
