use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;
use crate::utils::value_cast::format_date;

/// 사용자 응답 DTO
///
/// 저장된 문서 전체를 JSON으로 표현합니다. `_id`는 16진수 문자열,
/// `dateOfBirth`는 ISO 8601 문자열로 출력되며 값이 없는 필드는 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            dni,
            date_of_birth,
            email,
            password,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            dni,
            date_of_birth: date_of_birth.map(format_date),
            email,
            password,
        }
    }
}
