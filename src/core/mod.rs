//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! 전역 싱글톤 없이 [`AppContext`]를 명시적으로 만들어 `web::Data`로 전달합니다.
//! 테스트는 [`AppContext::in_memory`]로 외부 저장소 없이 같은 서비스 구성을 사용합니다.

pub mod context;

pub use context::AppContext;
