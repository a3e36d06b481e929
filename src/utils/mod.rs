//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`value_cast`] - 요청 JSON 값의 truthy 판정과 텍스트/날짜 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::value_cast::{cast_text, is_truthy};
//!
//! if is_truthy(&value) {
//!     user.name = cast_text(&value, "name")?;
//! }
//! ```

pub mod value_cast;
