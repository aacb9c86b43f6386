//! 사용자 링크 서비스 백엔드
//!
//! 회원가입/로그인, 프로필 이미지 업로드, 사용자 검색, 사용자 간 링크를 제공하는
//! Actix-web 기반 REST 서비스입니다.
//!
//! # Features
//!
//! - **인증**: bcrypt 비밀번호 해싱, HS256 JWT 발급
//! - **업로드**: 밀리초 타임스탬프 파일명으로 저장, `/public/uploads`로 제공
//! - **디렉터리**: 이름 부분 일치 검색, ID 조회 (비밀번호 해시 제외)
//! - **링크**: 순서 있는 쌍 기준 중복 방지, 양방향 조회
//! - **저장소**: MongoDB 또는 메모리 (`STORAGE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/*, /health, /public/uploads
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppContext로 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository / LinkRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_link_backend::config::AppConfig;
//! use user_link_backend::core::AppContext;
//!
//! let config = AppConfig::from_env()?;
//! let context = AppContext::bootstrap(&config).await?;
//! let matches = context.directory.search("al").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod test_utils;
