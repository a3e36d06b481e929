//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User {
//!     name: Some("John Doe".to_string()),
//!     email: Some("john@example.com".to_string()),
//!     password: Some("password123".to_string()),
//!     ..User::default()
//! };
//! user.check_schema()?;
//! ```

pub mod user;

pub use user::User;
