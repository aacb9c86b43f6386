//! 사용자 리포지토리 구현체

pub mod user_repo;
pub mod memory;

pub use user_repo::MongoUserRepository;
pub use memory::InMemoryUserRepository;
