//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 서비스 주입
//!
//! 핸들러는 [`UserService`](crate::services::users::UserService)를
//! `web::Data` 추출자로 받습니다. 서비스는 서버 시작 시 한 번 만들어져
//! 모든 워커가 공유합니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! - **Result 패턴**: 핸들러는 `Result<HttpResponse, AppError>`를 반환
//! - **자동 변환**: `AppError`가 `ResponseError`를 구현하므로 `?`만으로
//!   `{ "message": ... }` 응답이 만들어짐
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트

pub mod users;
