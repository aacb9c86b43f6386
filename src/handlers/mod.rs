//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 각 핸들러는 요청을 검증한 뒤
//! `web::Data<AppContext>`의 서비스에 위임하고, 결과를 JSON으로 변환합니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인
//! - **`uploads`**: 프로필 이미지 업로드
//! - **`users`**: 사용자 검색, ID 조회
//! - **`links`**: 링크 생성, 조회, 삭제
//!
//! ## 에러 응답
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 `?`로 에러를 전파합니다.
//! 검색/조회 엔드포인트의 파라미터 누락은 `PlainTextError`로 감싸 평문으로 응답하며,
//! 업로드는 `{ success: false, ... }` 형식을 직접 만듭니다.

pub mod auth;
pub mod uploads;
pub mod users;
pub mod links;
