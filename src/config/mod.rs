//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 한 곳에서 읽어 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스 설정
//!
//! ## 환경 분리
//!
//! `ENVIRONMENT`(또는 `NODE_ENV`)가 `test`이면 테스트 전용 데이터베이스
//! 연결 문자열(`MONGO_URI_TEST`)을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let uri = DatabaseConfig::uri();
//! let bind = ServerConfig::bind_address();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 데이터베이스 설정
//! export MONGO_URI="mongodb://localhost:27017"
//! export MONGO_URI_TEST="mongodb://localhost:27017"
//! export DATABASE_NAME="users_api"
//!
//! # 실행 환경
//! export ENVIRONMENT="development"  # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;
