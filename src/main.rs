//! 사용자 관리 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결과 인덱스를 준비한 뒤 사용자 CRUD REST API를 제공합니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_api::config::{env_file_name, Environment, ServerConfig};
use users_api::db::Database;
use users_api::repositories::users::MongoUserRepository;
use users_api::routes::configure_all_routes;
use users_api::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (env_file, env_result) = load_env_file();
    init_logging();
    report_env_file(env_file, env_result);

    info!("🚀 사용자 API 시작중... (환경: {:?})", Environment::current());

    // 데이터 스토어 초기화
    let repository = initialize_user_store().await?;
    let user_service = web::Data::new(UserService::new(Arc::new(repository)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/users", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE`에 따라 파일을 고르며([`env_file_name`]), 결과는 로깅 초기화 후
/// [`report_env_file`]로 기록합니다.
fn load_env_file() -> (&'static str, Result<PathBuf, dotenv::Error>) {
    let profile = std::env::var("PROFILE").ok();
    let file_name = env_file_name(profile.as_deref());

    let result = match file_name {
        // 기본 .env 파일은 상위 디렉터리까지 탐색
        ".env" => dotenv(),
        _ => dotenv::from_filename(file_name),
    };

    (file_name, result)
}

fn report_env_file(file_name: &str, result: Result<PathBuf, dotenv::Error>) {
    match result {
        Ok(_) => info!("{} 파일 로드 됨", file_name),
        Err(e) => error!("{} 파일 로드 실패: {}", file_name, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=users_api=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결과 사용자 컬렉션 인덱스를 준비합니다
///
/// 연결 실패는 치명적이며, 에러를 기록한 뒤 프로세스를 종료합니다.
async fn initialize_user_store() -> std::io::Result<MongoUserRepository> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    let repository = MongoUserRepository::new(&database);
    repository.create_indexes().await.map_err(|e| {
        error!("❌ 인덱스 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    Ok(repository)
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080`
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
