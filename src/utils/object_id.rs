//! ObjectId 파싱 유틸리티

use mongodb::bson::oid::ObjectId;
use crate::errors::AppError;

/// 16진수 문자열을 ObjectId로 파싱합니다.
///
/// 형식이 잘못된 경우 `on_invalid`가 만든 에러를 반환하므로,
/// 호출하는 쪽에서 400/404 중 맞는 의미를 고를 수 있습니다.
pub fn parse_object_id<F>(raw: &str, on_invalid: F) -> Result<ObjectId, AppError>
where
    F: FnOnce() -> AppError,
{
    ObjectId::parse_str(raw.trim()).map_err(|_| on_invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = ObjectId::new();
        let parsed = parse_object_id(&id.to_hex(), || AppError::NotFound("x".to_string())).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_invalid_object_id_uses_caller_error() {
        let result = parse_object_id("not-an-id", || AppError::NotFound("Link not found".to_string()));
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Link not found"));
    }
}
