//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 경로와 본문을 꺼내 [`UserService`]에 넘기고,
//! 결과를 상태 코드로 바꾸는 일만 합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK | 404, 500 |
//! | `GET` | `/api/users` | 전체 사용자 조회 | 200 OK | 500 |
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created | 400 |
//! | `PUT` | `/api/users/{id}` | 사용자 정보 수정 | 200 OK | 400, 404 |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 204 No Content | 404, 500 |
//!
//! 모든 실패 응답은 `{ "message": "..." }` 형식입니다.
//!
//! 본문은 `application/json`일 때만 해석합니다. 본문이 없거나 JSON이 아니면
//! 필드가 없는 요청으로 취급하고, 파싱할 수 없는 JSON은 400으로 거절합니다.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, get, post, put, delete};
use log::warn;
use crate::domain::dto::users::UserPayload;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 요청 본문을 [`UserPayload`]로 읽습니다.
fn read_payload(req: &HttpRequest, body: &web::Bytes) -> Result<UserPayload, AppError> {
    UserPayload::from_body(req.content_type(), body).map_err(|e| {
        warn!("JSON 본문 파싱 실패: {}", e);
        AppError::ValidationError(e.to_string())
    })
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/users/{user_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "_id": "507f1f77bcf86cd799439011",
///   "name": "John Doe",
///   "dateOfBirth": "1990-05-24T00:00:00.000Z",
///   "email": "john@example.com",
///   "password": "password123"
/// }
/// ```
///
/// ## 실패 사례
///
/// - 사용자 없음: 404 `{ "message": "User not found" }`
/// - 잘못된 ID 형식, 저장소 오류: 500
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 전체 사용자 조회 핸들러
///
/// 페이징이나 정렬 없이 저장된 모든 사용자를 배열로 반환합니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "dni": "12345678",
///   "dateOfBirth": "1990-05-24",
///   "email": "john@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # 응답
///
/// - 성공: 201, 저장소가 할당한 `_id`를 포함한 문서
/// - 필수 필드 누락, 형식 변환 실패, 중복 이메일: 400
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john@example.com","password":"password123"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = read_payload(&req, &body)?;
    let response = service.create_user(payload).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// 본문에 있는 필드 중 truthy 값만 기존 값을 덮어씁니다.
/// `""`, `0`, `false`, `null`은 무시됩니다. 본문이 없으면 문서는 그대로입니다.
///
/// # 엔드포인트
///
/// `PUT /api/users/{user_id}`
///
/// # 응답
///
/// - 성공: 200, 수정된 문서
/// - 사용자 없음: 404
/// - 잘못된 ID 형식, 변환/검증/저장 실패: 400
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = read_payload(&req, &body)?;
    let response = service.update_user(&user_id, payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제이며 복구할 수 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /api/users/{user_id}`
///
/// # 응답
///
/// ## 성공 (204 No Content)
/// ```bash,ignore
/// HTTP/1.1 204 No Content
/// Content-Length: 0
/// ```
///
/// ## 실패 사례
///
/// - 사용자 없음: 404 `{ "message": "User not found" }`
/// - 잘못된 ID 형식, 저장소 오류: 500
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{App, test as actix_test, web};
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::http::StatusCode;
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use crate::repositories::users::memory::InMemoryUserStore;
    use crate::repositories::users::UserStore;
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    fn test_app(
        store: Arc<dyn UserStore>,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(UserService::new(store)))
            .configure(configure_all_routes)
    }

    fn memory_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        test_app(Arc::new(InMemoryUserStore::new()))
    }

    fn john() -> Value {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": "password123"
        })
    }

    fn message(body: &Value) -> Option<&str> {
        body.get("message").and_then(Value::as_str)
    }

    #[actix_web::test]
    async fn create_user_returns_created_document() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        let id = body["_id"].as_str().expect("_id is a string");
        assert!(ObjectId::parse_str(id).is_ok());
        assert_eq!(body["name"], "John Doe");
        assert_eq!(body["email"], "john@example.com");
    }

    #[actix_web::test]
    async fn create_user_casts_date_of_birth() {
        let app = actix_test::init_service(memory_app()).await;

        let mut payload = john();
        payload["dateOfBirth"] = json!("1990-05-24");
        payload["dni"] = json!(12345678);

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload)
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["dateOfBirth"], "1990-05-24T00:00:00.000Z");
        assert_eq!(body["dni"], "12345678");
    }

    #[actix_web::test]
    async fn create_user_without_name_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "john@example.com", "password": "password123" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            message(&body),
            Some("User validation failed: name: Path `name` is required.")
        );
    }

    #[actix_web::test]
    async fn create_user_with_bad_date_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let mut payload = john();
        payload["dateOfBirth"] = json!("not a date");

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(message(&body).is_some_and(|m| m.starts_with("Cast to date failed")));
    }

    #[actix_web::test]
    async fn create_user_with_duplicate_email_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let first = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        assert_eq!(actix_test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let second = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let response = actix_test::call_service(&app, second).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn create_user_with_malformed_json_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(message(&body).is_some());
    }

    #[actix_web::test]
    async fn list_users_keeps_insertion_order() {
        let app = actix_test::init_service(memory_app()).await;

        for (name, email) in [("Ana", "ana@example.com"), ("Ben", "ben@example.com")] {
            let request = actix_test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "name": name, "email": email, "password": "secret" }))
                .to_request();
            assert_eq!(actix_test::call_service(&app, request).await.status(), StatusCode::CREATED);
        }

        let request = actix_test::TestRequest::get().uri("/api/users").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let users = body.as_array().expect("array body");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["name"], "Ana");
        assert_eq!(users[1]["name"], "Ben");
    }

    #[actix_web::test]
    async fn list_users_when_empty() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn get_user_by_id() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let id = created["_id"].as_str().expect("_id");

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, created);
    }

    #[actix_web::test]
    async fn get_unknown_user_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/users/{}", ObjectId::new()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(message(&body), Some("User not found"));
    }

    #[actix_web::test]
    async fn get_with_malformed_id_is_server_error() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::get().uri("/api/users/123").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(message(&body).is_some_and(|m| m.starts_with("Cast to ObjectId failed")));
    }

    #[actix_web::test]
    async fn update_name_only() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let id = created["_id"].as_str().expect("_id");

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["_id"], created["_id"]);
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(body["email"], created["email"]);
        assert_eq!(body["password"], created["password"]);
    }

    #[actix_web::test]
    async fn update_with_falsy_values_keeps_stored_values() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let id = created["_id"].as_str().expect("_id");

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({ "name": "", "email": null, "password": 0, "dni": false }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, created);
    }

    #[actix_web::test]
    async fn update_unknown_user_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/users/{}", ObjectId::new()))
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(message(&body), Some("User not found"));
    }

    #[actix_web::test]
    async fn update_with_malformed_id_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::put()
            .uri("/api/users/123")
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_then_get_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let uri = format!("/api/users/{}", created["_id"].as_str().expect("_id"));

        let request = actix_test::TestRequest::delete().uri(&uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());

        let request = actix_test::TestRequest::get().uri(&uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_unknown_user_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/users/{}", ObjectId::new()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(message(&body), Some("User not found"));
    }

    #[actix_web::test]
    async fn delete_with_malformed_id_is_server_error() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::delete().uri("/api/users/123").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn store_failure_maps_per_operation() {
        let app = actix_test::init_service(test_app(Arc::new(
            InMemoryUserStore::failing("connection refused"),
        )))
        .await;
        let uri = format!("/api/users/{}", ObjectId::new());

        let cases = [
            (actix_test::TestRequest::get().uri(&uri), StatusCode::INTERNAL_SERVER_ERROR),
            (actix_test::TestRequest::get().uri("/api/users"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                actix_test::TestRequest::post().uri("/api/users").set_json(john()),
                StatusCode::BAD_REQUEST,
            ),
            (
                actix_test::TestRequest::put().uri(&uri).set_json(json!({ "name": "Jane Doe" })),
                StatusCode::BAD_REQUEST,
            ),
            (actix_test::TestRequest::delete().uri(&uri), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (request, expected) in cases {
            let response = actix_test::call_service(&app, request.to_request()).await;
            assert_eq!(response.status(), expected);
            let body: Value = actix_test::read_body_json(response).await;
            assert_eq!(message(&body), Some("connection refused"));
        }
    }

    #[actix_web::test]
    async fn update_save_failure_is_bad_request() {
        let app = actix_test::init_service(test_app(Arc::new(
            InMemoryUserStore::failing_saves("write concern error"),
        )))
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let id = created["_id"].as_str().expect("_id");

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(message(&body), Some("write concern error"));
    }

    #[actix_web::test]
    async fn update_to_taken_email_is_bad_request() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        assert_eq!(actix_test::call_service(&app, request).await.status(), StatusCode::CREATED);

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com", "password": "secret" }))
            .to_request();
        let jane: Value = actix_test::call_and_read_body_json(&app, request).await;
        let uri = format!("/api/users/{}", jane["_id"].as_str().expect("_id"));

        let request = actix_test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "email": "john@example.com" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(message(&body).is_some_and(|m| m.contains("duplicate key")));

        let request = actix_test::TestRequest::get().uri(&uri).to_request();
        let stored: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(stored["email"], "jane@example.com");
    }

    #[actix_web::test]
    async fn update_without_body_keeps_document() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(john())
            .to_request();
        let created: Value = actix_test::call_and_read_body_json(&app, request).await;
        let uri = format!("/api/users/{}", created["_id"].as_str().expect("_id"));

        let requests = [
            actix_test::TestRequest::put().uri(&uri),
            actix_test::TestRequest::put()
                .uri(&uri)
                .insert_header(("content-type", "application/json")),
            actix_test::TestRequest::put()
                .uri(&uri)
                .insert_header(("content-type", "text/plain"))
                .set_payload("name=Jane"),
        ];

        for request in requests {
            let response = actix_test::call_service(&app, request.to_request()).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = actix_test::read_body_json(response).await;
            assert_eq!(body, created);
        }
    }

    #[actix_web::test]
    async fn update_unknown_user_without_body_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/users/{}", ObjectId::new()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(message(&body), Some("User not found"));
    }

    #[actix_web::test]
    async fn create_user_without_body_fails_schema() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::post().uri("/api/users").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(message(&body).is_some_and(|m| m.starts_with("User validation failed")));
    }

    #[actix_web::test]
    async fn health_check_reports_healthy() {
        let app = actix_test::init_service(memory_app()).await;

        let request = actix_test::TestRequest::get().uri("/health").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }
}
