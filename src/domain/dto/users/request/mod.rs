//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 담는 타입입니다.
//! 필드 값은 느슨한 타입(`serde_json::Value`)으로 받아 두었다가
//! 엔티티로 옮길 때 [`crate::utils::value_cast`]로 변환합니다.
//!
//! ## 에러 핸들링
//!
//! 변환 실패 시 [`CastError`](crate::utils::value_cast::CastError)가 발생하며,
//! 서비스 계층에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod user_payload;

pub use user_payload::UserPayload;
