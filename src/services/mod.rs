//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 trait 객체(`Arc<dyn ...>`)와 설정값을 생성자로 받으며,
//! 전역 상태를 갖지 않습니다. 조립은 [`crate::core::AppContext`]가 담당합니다.
//!
//! - [`auth`] - 회원가입, 로그인, JWT
//! - [`users`] - 사용자 검색/조회
//! - [`links`] - 사용자 간 링크
//! - [`uploads`] - 프로필 이미지 저장
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::DirectoryService;
//!
//! let directory = DirectoryService::new(users.clone());
//! let matches = directory.search("al").await?;
//! ```

pub mod auth;
pub mod users;
pub mod links;
pub mod uploads;
