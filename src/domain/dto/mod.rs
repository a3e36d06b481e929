//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티의 내부 표현(BSON)과 클라이언트가 주고받는 JSON 표현을 분리합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # 요청 DTO (클라이언트 → 서버)
//!     └── response/   # 응답 DTO (서버 → 클라이언트)
//! ```

pub mod users;
