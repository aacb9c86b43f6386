//! 업로드 관련 DTO

pub mod response;

pub use response::UploadResponse;
