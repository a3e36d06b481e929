//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`] trait에만 의존하고, 실제 구현은 시작 시점에
//! 주입됩니다. 운영 환경에서는 [`MongoUserRepository`]를, 테스트에서는
//! 메모리 저장소를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! let user = store.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use crate::domain::entities::users::User;

pub mod user_repo;
#[cfg(test)]
pub mod memory;

pub use user_repo::MongoUserRepository;

/// 저장소 계층 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// ObjectId 형식이 아닌 식별자
    #[error("Cast to ObjectId failed for value \"{0}\" (type string) at path \"_id\" for model \"User\"")]
    InvalidId(String),

    /// 유니크 제약 위반
    #[error("{0}")]
    Duplicate(String),

    /// 연결 실패, 쿼리 실패 등 저장소 내부 오류
    #[error("{0}")]
    Backend(String),
}

/// 사용자 컬렉션에 대한 저장소 인터페이스
///
/// 모든 식별자는 ObjectId의 16진수 문자열 표현입니다.
/// 형식이 잘못된 식별자는 [`StoreError::InvalidId`]로 실패합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// 전체 사용자 조회 (저장소가 반환하는 순서 그대로)
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// 새 사용자 저장
    ///
    /// 저장소가 `_id`를 할당하며, 할당된 ID를 포함한 사용자를 반환합니다.
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// 기존 사용자 문서를 통째로 교체
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 교체됨
    /// * `Ok(false)` - 해당 `_id`의 문서가 없음
    async fn save(&self, user: &User) -> Result<bool, StoreError>;

    /// 사용자를 찾아 원자적으로 삭제하고, 삭제된 문서를 반환
    async fn find_and_delete(&self, id: &str) -> Result<Option<User>, StoreError>;
}

/// 문자열 식별자를 ObjectId로 변환합니다.
pub fn parse_user_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// 저장 대상 사용자의 `_id`를 꺼냅니다.
pub(crate) fn require_id(user: &User) -> Result<ObjectId, StoreError> {
    user.id
        .ok_or_else(|| StoreError::Backend("cannot save a user without an _id".to_string()))
}
