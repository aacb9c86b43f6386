//! # Domain Models
//!
//! 저장되지 않는 도메인 모델을 정의합니다. 현재는 JWT 페이로드 모델만 있습니다.

pub mod token;
