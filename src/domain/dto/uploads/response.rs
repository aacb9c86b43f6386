use serde::{Deserialize, Serialize};

/// 업로드 응답 래퍼
///
/// 성공 시 `{success: true, url}`, 실패 시 `{success: false, message, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn success(url: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            message: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            url: None,
            message: Some(message.into()),
            error,
        }
    }
}
