//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소에 영속되는 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **스키마 검증**: `validator`를 통한 필수 필드 확인

pub mod users;
