//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 컬렉션 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`users::User`] | `users` | 가입한 사용자 (이메일 unique) |
//! | [`links::Link`] | `links` | 두 사용자 사이의 링크 (순서 있는 쌍 unique) |
//!
//! ## 설계 원칙
//!
//! - **ID 참조**: 링크는 사용자 문서를 직접 품지 않고 ObjectId로만 참조합니다.
//! - **BSON 필드명 고정**: 기존 클라이언트/데이터와 맞추기 위해 `serde(rename)`으로
//!   문서 필드명을 명시합니다 (`password`, `profileImage`, `user_id`, `userId`).
//! - **비밀번호 해시 비노출**: 엔티티는 해시를 담지만, API 응답은 항상
//!   `dto::users::response::UserResponse`로 투영해서 내보냅니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs
//! ├── users/
//! │   └── user.rs     ← User 엔티티
//! └── links/
//!     └── link.rs     ← Link 엔티티
//! ```

pub mod users;
pub mod links;
