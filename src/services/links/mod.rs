//! 사용자 링크 서비스 모듈

pub mod link_service;

pub use link_service::LinkService;
