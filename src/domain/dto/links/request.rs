use serde::Deserialize;

/// `POST /link` 본문
///
/// 필드명은 기존 클라이언트 계약 그대로 `user_id`, `userId`입니다.
#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    pub user_id: Option<String>,
    #[serde(rename = "userId")]
    pub linked_user_id: Option<String>,
}

/// `POST /unlink` 본문
#[derive(Debug, Deserialize)]
pub struct UnlinkRequest {
    #[serde(rename = "linkId")]
    pub link_id: Option<String>,
}

/// `GET /linkedUsers?userId=` 쿼리
#[derive(Debug, Deserialize)]
pub struct LinkedUsersQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
