//! 사용자 생성/수정 요청 DTO
//!
//! 생성(`POST`)과 수정(`PUT`)은 같은 본문 구조를 사용합니다.
//! 모든 필드는 선택사항이며, 알 수 없는 필드는 무시됩니다.
//!
//! 요청 본문은 [`UserPayload::from_body`]로 읽습니다.
//!
//! | 본문 | 결과 |
//! |------|------|
//! | JSON이 아닌 Content-Type, 빈 본문 | 빈 payload |
//! | JSON 객체 | 필드별 payload |
//! | JSON 배열 | 빈 payload (위치 기반 매핑 없음) |
//! | 그 외 JSON 값, 파싱 실패 | 에러 |

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::domain::entities::users::User;
use crate::utils::value_cast::{cast_date, cast_text, is_truthy, CastError};

/// 사용자 생성/수정 요청 본문
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
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

impl UserPayload {
    /// 요청 본문을 payload로 읽습니다.
    ///
    /// `application/json`(또는 `+json`) 본문만 해석하며, 그 외에는
    /// 필드가 하나도 없는 payload를 돌려줍니다. 따라서 본문 없는 수정
    /// 요청은 기존 문서를 그대로 둡니다.
    ///
    /// # Arguments
    ///
    /// * `content_type` - 파라미터를 제외한 미디어 타입 (`application/json`)
    /// * `body` - 원본 본문 바이트
    pub fn from_body(content_type: &str, body: &[u8]) -> Result<Self, serde_json::Error> {
        if !is_json_media_type(content_type) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            Value::Array(_) => Ok(Self::default()),
            other => Err(serde_json::Error::custom(format!(
                "invalid type: {}, expected a JSON object",
                other
            ))),
        }
    }

    /// 새 사용자 엔티티를 만듭니다.
    ///
    /// 전달되지 않은 필드는 비어 있는 상태로 남습니다.
    /// 필수 필드 검증은 [`User::check_schema`]에서 수행합니다.
    pub fn into_user(self) -> Result<User, CastError> {
        Ok(User {
            id: None,
            name: text_field(self.name.as_ref(), "name")?,
            dni: text_field(self.dni.as_ref(), "dni")?,
            date_of_birth: match self.date_of_birth.as_ref() {
                Some(value) => cast_date(value, "dateOfBirth")?,
                None => None,
            },
            email: text_field(self.email.as_ref(), "email")?,
            password: text_field(self.password.as_ref(), "password")?,
        })
    }

    /// 기존 사용자에 요청 값을 병합합니다.
    ///
    /// 각 필드는 요청 값이 **존재하고 truthy**인 경우에만 덮어씁니다.
    /// `""`, `0`, `false`, `null`을 보내면 기존 값이 그대로 유지됩니다.
    ///
    /// 변환에 실패하면 `user`는 변경되지 않습니다.
    pub fn merge_into(&self, user: &mut User) -> Result<(), CastError> {
        let name = truthy_text(self.name.as_ref(), "name")?;
        let dni = truthy_text(self.dni.as_ref(), "dni")?;
        let date_of_birth = match self.date_of_birth.as_ref().filter(|value| is_truthy(value)) {
            Some(value) => cast_date(value, "dateOfBirth")?,
            None => None,
        };
        let email = truthy_text(self.email.as_ref(), "email")?;
        let password = truthy_text(self.password.as_ref(), "password")?;

        if name.is_some() {
            user.name = name;
        }
        if dni.is_some() {
            user.dni = dni;
        }
        if date_of_birth.is_some() {
            user.date_of_birth = date_of_birth;
        }
        if email.is_some() {
            user.email = email;
        }
        if password.is_some() {
            user.password = password;
        }

        Ok(())
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    let media_type = content_type.trim();

    media_type.eq_ignore_ascii_case("application/json")
        || media_type.to_ascii_lowercase().ends_with("+json")
}

fn text_field(value: Option<&Value>, path: &'static str) -> Result<Option<String>, CastError> {
    match value {
        Some(value) => cast_text(value, path),
        None => Ok(None),
    }
}

fn truthy_text(value: Option<&Value>, path: &'static str) -> Result<Option<String>, CastError> {
    text_field(value.filter(|value| is_truthy(value)), path)
}
