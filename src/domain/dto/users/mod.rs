//! 사용자 DTO 모듈
//!
//! - [`request::UserPayload`] - 생성/수정 요청 본문
//! - [`response::UserResponse`] - 사용자 문서 응답

pub mod request;
pub mod response;

pub use request::UserPayload;
pub use response::UserResponse;
