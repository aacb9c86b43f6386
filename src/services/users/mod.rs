//! 사용자 조회 서비스 모듈

pub mod directory_service;

pub use directory_service::{DirectoryService, SEARCH_LIMIT};
