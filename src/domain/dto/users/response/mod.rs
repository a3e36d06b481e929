//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에게 전달할 JSON 형태로 변환합니다.
//!
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "name": "John Doe",
//!   "dni": "12345678",
//!   "dateOfBirth": "1990-05-24T00:00:00.000Z",
//!   "email": "john@example.com",
//!   "password": "password123"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
