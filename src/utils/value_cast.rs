//! # JSON 값 변환 유틸리티
//!
//! 요청 본문은 느슨한 타입의 JSON으로 들어옵니다. 이 모듈은 JSON 값을
//! 사용자 문서의 텍스트/날짜 속성으로 변환하고, 업데이트 시 사용하는
//! "truthy" 판정을 제공합니다.
//!
//! # Truthy 규칙
//!
//! | 값 | truthy |
//! |----|--------|
//! | `null` | ✗ |
//! | `false` | ✗ |
//! | `0`, `0.0` | ✗ |
//! | `""` | ✗ |
//! | 그 외 (배열, 객체 포함) | ✓ |

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use mongodb::bson;
use serde_json::Value;
use thiserror::Error;

/// JSON 값을 속성 타입으로 변환하지 못했을 때의 에러
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cast to {kind} failed for value {value} at path \"{path}\"")]
pub struct CastError {
    /// 목표 타입 이름 (`string`, `date`)
    pub kind: &'static str,
    /// 원본 값의 JSON 표현
    pub value: String,
    /// 변환 대상 속성 이름
    pub path: &'static str,
}

impl CastError {
    fn new(kind: &'static str, value: &Value, path: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            path,
        }
    }
}

/// 값이 truthy인지 판정합니다.
///
/// # 예제
///
/// ```rust,ignore
/// assert!(is_truthy(&json!("John")));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(0)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// JSON 값을 텍스트 속성으로 변환합니다.
///
/// 문자열은 그대로, 숫자와 불리언은 문자열 표현으로 변환합니다.
/// `null`은 값 없음(`None`)으로 취급하며, 배열/객체는 변환할 수 없습니다.
pub fn cast_text(value: &Value, path: &'static str) -> Result<Option<String>, CastError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(CastError::new("string", value, path)),
    }
}

/// JSON 값을 날짜 속성으로 변환합니다.
///
/// # 허용 형식
///
/// - RFC 3339 타임스탬프 (`1990-05-17T08:30:00Z`, `1990-05-17T08:30:00+09:00`)
/// - 시간대 없는 타임스탬프 (`1990-05-17T08:30:00.250`, UTC로 해석)
/// - 날짜 (`1990-05-17`, UTC 자정)
/// - 에포크 기준 밀리초 숫자
///
/// `null`과 빈 문자열은 값 없음으로 취급합니다.
pub fn cast_date(value: &Value, path: &'static str) -> Result<Option<bson::DateTime>, CastError> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => parse_date_str(text),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis.trunc() as i64))
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };

    parsed
        .map(|date| Some(bson::DateTime::from_millis(date.timestamp_millis())))
        .ok_or_else(|| CastError::new("date", value, path))
}

/// 날짜를 `YYYY-MM-DDTHH:MM:SS.mmmZ` 형식으로 출력합니다.
pub fn format_date(date: bson::DateTime) -> String {
    Utc.timestamp_millis_opt(date.timestamp_millis())
        .single()
        .map(|utc| utc.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| date.to_string())
}

fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
