//! 사용자 관련 요청 DTO

pub mod auth_request;
pub mod directory_request;

pub use auth_request::{LoginRequest, RegisterRequest};
pub use directory_request::{SearchQuery, UserIdQuery};
