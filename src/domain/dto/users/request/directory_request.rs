//! 사용자 조회 쿼리 DTO

use serde::Deserialize;

/// `GET /search?q=` 쿼리
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// `GET /userById?userId=` 쿼리
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
