//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 인증이나 역할 기반 접근 제어 없이 모든 라우트가 공개됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 헬스체크와 사용자 라우트를 애플리케이션에 등록합니다.
/// [`UserService`](crate::services::users::UserService)는 호출 측에서
/// `web::Data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/users` - 전체 사용자 조회
/// - `GET /api/users/{id}` - 사용자 조회
/// - `POST /api/users` - 사용자 생성
/// - `PUT /api/users/{id}` - 사용자 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:3000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john@example.com","password":"password123"}'
///
/// curl http://localhost:3000/api/users/507f1f77bcf86cd799439011
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_api",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "dependency_injection": "web::Data"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "web::Data"
        }
    }))
}
