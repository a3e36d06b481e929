//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며, 저장소 결과를
//! 작업별 [`AppError`](crate::errors::AppError) 분류로 변환합니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 생성자 기반 의존성 주입 (`Arc<dyn UserStore>`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(repository));
//! let users = user_service.list_users().await?;
//! ```

pub mod users;
