//! # 문자열 유틸리티
//!
//! 요청 파라미터 정리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 파라미터 검증 및 정리
///
/// 값이 없거나 공백만 있는 경우 주어진 메시지로 ValidationError를 반환하고,
/// 유효한 경우 앞뒤 공백을 제거한 슬라이스를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// let q = require_param(query.q.as_deref(), "Query parameter is required")?;
/// ```
pub fn require_param<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    require_non_blank(value, message).map(str::trim)
}

/// 값이 없거나 공백만 있으면 거부하되, 통과한 값은 그대로 돌려줍니다.
///
/// 검색어처럼 앞뒤 공백도 의미가 있는 파라미터에 사용합니다.
pub fn require_non_blank<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError(message.to_string()))
}

/// 선택적 문자열 필드 정리
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Serde 역직렬화용 선택적 문자열 정리 함수
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(require_param(Some("al"), "required").unwrap(), "al");
        assert_eq!(require_param(Some("  al  "), "required").unwrap(), "al");

        assert!(require_param(None, "required").is_err());
        assert!(require_param(Some(""), "required").is_err());
        assert!(require_param(Some(" \t\n"), "required").is_err());
    }

    #[test]
    fn test_require_non_blank_keeps_surrounding_spaces() {
        assert_eq!(require_non_blank(Some(" Smith"), "required").unwrap(), " Smith");
        assert!(require_non_blank(Some("   "), "required").is_err());
        assert!(require_non_blank(None, "required").is_err());
    }

    #[test]
    fn test_require_param_carries_message() {
        match require_param(None, "Query parameter is required") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Query parameter is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  서울시 강남구  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("서울시 강남구".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없으면 default
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
