//! 인증 서비스 모듈
//!
//! 회원가입/로그인과 JWT 발급·검증을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(&config.jwt));
//! let auth = AuthService::new(users, tokens, config.password.bcrypt_cost);
//! let response = auth.login(request).await?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::AuthService;
