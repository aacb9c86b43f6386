//! User Link HTTP Handlers
//!
//! 사용자 간 링크 생성, 조회, 삭제 엔드포인트입니다.

use actix_web::{get, post, web, HttpResponse};
use crate::core::AppContext;
use crate::domain::dto::links::{LinkCreatedResponse, LinkRequest, LinkedUsersQuery, MessageResponse, UnlinkRequest};
use crate::errors::AppError;
use crate::utils::string_utils::require_param;

const LINK_FIELDS_REQUIRED: &str = "Both user_id and userId are required";

/// 링크 생성
///
/// # Endpoint
/// `POST /api/auth/link`
///
/// # Request Body
/// ```json
/// { "user_id": "<요청한 사용자>", "userId": "<대상 사용자>" }
/// ```
#[post("/link")]
pub async fn link_users(
    context: web::Data<AppContext>,
    payload: web::Json<LinkRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = require_param(payload.user_id.as_deref(), LINK_FIELDS_REQUIRED)?;
    let linked_user_id = require_param(payload.linked_user_id.as_deref(), LINK_FIELDS_REQUIRED)?;

    let link = context.links.link(user_id, linked_user_id).await?;
    let link_id = link.id.map(|id| id.to_hex()).ok_or_else(|| {
        AppError::InternalError("저장된 링크에 ID가 없습니다".to_string())
    })?;

    Ok(HttpResponse::Ok().json(LinkCreatedResponse::new(link_id)))
}

/// 링크된 사용자 목록
///
/// # Endpoint
/// `GET /api/auth/linkedUsers?userId={id}`
#[get("/linkedUsers")]
pub async fn linked_users(
    context: web::Data<AppContext>,
    query: web::Query<LinkedUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = require_param(query.user_id.as_deref(), "User ID parameter is required")?;

    let users = context.links.list_linked(user_id).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 링크 삭제
///
/// 참여자 확인 없이 링크 ID로 삭제합니다. ID가 없거나 잘못된 경우에도 `404 Link not found`.
///
/// # Endpoint
/// `POST /api/auth/unlink`
#[post("/unlink")]
pub async fn unlink_users(
    context: web::Data<AppContext>,
    payload: web::Json<UnlinkRequest>,
) -> Result<HttpResponse, AppError> {
    let link_id = payload.link_id.as_deref().unwrap_or_default();

    context.links.unlink(link_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User unlinked successfully")))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};
    use crate::test_utils::{memory_context, seed_user, test_app};

    #[actix_web::test]
    async fn test_link_list_unlink_flow() {
        let (context, _dir) = memory_context();
        let a = seed_user(&context, "Alice", "alice@example.com").await;
        let b = seed_user(&context, "Bob", "bob@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/link")
            .set_json(json!({ "user_id": a, "userId": b }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let created: Value = serde_json::from_slice(&actix_test::read_body(response).await).unwrap();
        assert_eq!(created["message"], "Link created successfully");
        let link_id = created["linkId"].as_str().unwrap().to_string();

        for (viewer, expected) in [(&a, &b), (&b, &a)] {
            let request = actix_test::TestRequest::get()
                .uri(&format!("/api/auth/linkedUsers?userId={}", viewer))
                .to_request();
            let linked: Value = actix_test::call_and_read_body_json(&app, request).await;
            let linked = linked.as_array().unwrap();
            assert_eq!(linked.len(), 1);
            assert_eq!(linked[0]["_id"], expected.as_str());
            assert!(linked[0].get("email").is_none());
        }

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/unlink")
            .set_json(json!({ "linkId": link_id }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            actix_test::read_body(response).await,
            r#"{"message":"User unlinked successfully"}"#
        );

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/auth/linkedUsers?userId={}", a))
            .to_request();
        let linked: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(linked, json!([]));
    }

    #[actix_web::test]
    async fn test_duplicate_and_reverse_links() {
        let (context, _dir) = memory_context();
        let a = seed_user(&context, "Alice", "alice@example.com").await;
        let b = seed_user(&context, "Bob", "bob@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let link = |from: &str, to: &str| {
            actix_test::TestRequest::post()
                .uri("/api/auth/link")
                .set_json(json!({ "user_id": from, "userId": to }))
                .to_request()
        };

        assert_eq!(actix_test::call_service(&app, link(a.as_str(), b.as_str())).await.status(), StatusCode::OK);

        let response = actix_test::call_service(&app, link(a.as_str(), b.as_str())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            actix_test::read_body(response).await,
            r#"{"message":"Users are already linked"}"#
        );

        assert_eq!(actix_test::call_service(&app, link(b.as_str(), a.as_str())).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_link_error_statuses() {
        let (context, _dir) = memory_context();
        let a = seed_user(&context, "Alice", "alice@example.com").await;
        let app = actix_test::init_service(test_app(context)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/link")
            .set_json(json!({ "user_id": a }))
            .to_request();
        assert_eq!(actix_test::call_service(&app, request).await.status(), StatusCode::BAD_REQUEST);

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/link")
            .set_json(json!({ "user_id": a, "userId": "000000000000000000000000" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            actix_test::read_body(response).await,
            r#"{"message":"One or both users not found"}"#
        );

        let request = actix_test::TestRequest::post()
            .uri("/api/auth/unlink")
            .set_json(json!({ "linkId": "000000000000000000000000" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(actix_test::read_body(response).await, r#"{"message":"Link not found"}"#);

        let request = actix_test::TestRequest::get().uri("/api/auth/linkedUsers").to_request();
        assert_eq!(actix_test::call_service(&app, request).await.status(), StatusCode::BAD_REQUEST);

        let request = actix_test::TestRequest::get().uri("/api/auth/linkedUsers?userId=bad").to_request();
        assert_eq!(actix_test::call_service(&app, request).await.status(), StatusCode::BAD_REQUEST);
    }
}
