use serde::{Deserialize, Serialize};

/// 링크 생성 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCreatedResponse {
    pub message: String,
    #[serde(rename = "linkId")]
    pub link_id: String,
}

impl LinkCreatedResponse {
    pub fn new(link_id: String) -> Self {
        Self {
            message: "Link created successfully".to_string(),
            link_id,
        }
    }
}

/// 메시지만 담는 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
