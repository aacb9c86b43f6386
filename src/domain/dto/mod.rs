//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의하는 모듈입니다.
//!
//! ```text
//! dto/
//! ├── users/     ← 회원가입, 로그인, 사용자 조회
//! ├── links/     ← 링크 생성/해제/조회
//! └── uploads/   ← 프로필 이미지 업로드
//! ```

pub mod users;
pub mod links;
pub mod uploads;

