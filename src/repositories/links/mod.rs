//! 링크 리포지토리 구현체

pub mod link_repo;
pub mod memory;

pub use link_repo::MongoLinkRepository;
pub use memory::InMemoryLinkRepository;
