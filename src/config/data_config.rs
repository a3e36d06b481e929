//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB 연결 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 별도의 테스트 데이터베이스를 사용
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_test() {
    ///     // MONGO_URI_TEST 사용
    /// }
    /// ```
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Environment::Test)
    }
}

/// `PROFILE` 값에 해당하는 환경 변수 파일 이름
///
/// * `dev` 또는 값 없음 - `.env.dev`
/// * `prod` - `.env.prod`
/// * 기타 - `.env`
pub fn env_file_name(profile: Option<&str>) -> &'static str {
    match profile.unwrap_or("dev") {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    fn parse_port(raw: Option<&str>) -> u16 {
        raw.and_then(|value| value.trim().parse().ok())
            .unwrap_or(3000)
    }
}

/// MongoDB 연결 설정
///
/// 테스트 환경에서는 `MONGO_URI_TEST`, 그 외 환경에서는 `MONGO_URI`를 사용하여
/// 테스트 실행이 운영 데이터를 건드리지 않도록 분리합니다.
pub struct DatabaseConfig;

impl DatabaseConfig {
    const DEFAULT_URI: &'static str = "mongodb://localhost:27017";

    /// 현재 환경에 맞는 MongoDB 연결 URI를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGO_URI`: 일반 실행용 연결 문자열
    /// - `MONGO_URI_TEST`: 테스트 실행용 연결 문자열
    pub fn uri() -> String {
        let var = Self::uri_var(&Environment::current());
        env::var(var).unwrap_or_else(|_| Self::DEFAULT_URI.to_string())
    }

    /// 환경별로 참조할 URI 환경 변수 이름
    pub fn uri_var(env: &Environment) -> &'static str {
        if env.is_test() {
            "MONGO_URI_TEST"
        } else {
            "MONGO_URI"
        }
    }

    /// 사용할 데이터베이스 이름을 반환합니다.
    ///
    /// `DATABASE_NAME`이 없으면 환경별 기본값을 사용합니다.
    pub fn database_name() -> String {
        env::var("DATABASE_NAME")
            .unwrap_or_else(|_| Self::default_database_name(&Environment::current()).to_string())
    }

    pub fn default_database_name(env: &Environment) -> &'static str {
        if env.is_test() {
            "users_api_test"
        } else {
            "users_api"
        }
    }
}
