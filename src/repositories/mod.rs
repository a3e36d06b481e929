//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 인터페이스([`users::UserStore`])와 MongoDB 구현체를 제공합니다.
//! 저장소 핸들은 시작 시점에 한 번 생성되어 `Arc`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::MongoUserRepository;
//!
//! let repo = MongoUserRepository::new(&database);
//! repo.create_indexes().await?;
//! ```

pub mod users;
