//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 구조체들입니다.
//!
//! - **데이터 은닉**: 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//! - **필드명**: 기존 클라이언트와 맞추기 위해 `_id`, camelCase를 사용합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "name": "Alice",
//!   "email": "alice@example.com",
//!   "address": null,
//!   "dob": "1990-01-01",
//!   "phone": null,
//!   "profileImage": "http://localhost:8080/public/uploads/1718000000000.png",
//!   "latitude": 37.56,
//!   "longitude": 126.97
//! }
//! ```

pub mod user_response;

pub use user_response::{LinkedUserResponse, LoginResponse, RegisterResponse, UserResponse};
