//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 요청 값 변환 및 필수 필드 검증
//! - truthy 값만 반영하는 부분 수정
//! - 작업별 에러 분류 (400 / 404 / 500)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.create_user(payload).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
