//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! MongoDB `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// 사용자 엔티티
///
/// 시스템의 유일한 엔티티입니다. `_id`는 생성 시 저장소가 할당하며
/// 이후 변경되지 않습니다.
///
/// 비밀번호는 전달받은 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름 (필수)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Path `name` is required."),
        length(min = 1, message = "Path `name` is required.")
    )]
    pub name: Option<String>,
    /// 신분증 번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    /// 생년월일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime>,
    /// 이메일 (필수, 저장소에서 유니크)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Path `email` is required."),
        length(min = 1, message = "Path `email` is required.")
    )]
    pub email: Option<String>,
    /// 비밀번호 (필수)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Path `password` is required."),
        length(min = 1, message = "Path `password` is required.")
    )]
    pub password: Option<String>,
}

impl User {
    /// 검증 메시지를 출력할 때의 필드 순서
    const FIELD_ORDER: [&'static str; 3] = ["name", "email", "password"];

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 스키마 검증
    ///
    /// 필수 필드(name, email, password)의 존재 여부를 확인합니다.
    ///
    /// # Returns
    ///
    /// * `Err(String)` - `User validation failed: name: Path `name` is required.` 형태의 메시지
    pub fn check_schema(&self) -> Result<(), String> {
        self.validate().map_err(|errors| Self::describe(&errors))
    }

    fn describe(errors: &ValidationErrors) -> String {
        let field_errors = errors.field_errors();

        let details: Vec<String> = Self::FIELD_ORDER
            .iter()
            .filter_map(|field| {
                let error = field_errors.get(*field)?.first()?;
                let message = error
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| error.code.to_string());
                Some(format!("{}: {}", field, message))
            })
            .collect();

        format!("User validation failed: {}", details.join(", "))
    }
}
