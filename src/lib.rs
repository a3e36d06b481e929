//! 사용자 관리 REST API 백엔드
//!
//! 단일 사용자(User) 엔티티에 대한 CRUD 작업을 MongoDB 위에서 제공하는
//! Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 단건/전체 조회, 부분 수정, 삭제
//! - **MongoDB**: 사용자 문서 영구 저장, 이메일 유니크 인덱스
//! - **생성자 주입**: 저장소 trait 객체를 서비스에 주입, 테스트에서는 메모리 저장소로 교체
//! - **일관된 에러 응답**: 모든 실패는 `{ "message": ... }` 본문
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait + MongoDB 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use users_api::db::Database;
//! use users_api::repositories::users::MongoUserRepository;
//! use users_api::routes::configure_all_routes;
//! use users_api::services::users::UserService;
//!
//! let database = Database::new().await?;
//! let service = web::Data::new(UserService::new(Arc::new(MongoUserRepository::new(&database))));
//!
//! let app = App::new()
//!     .app_data(service.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
