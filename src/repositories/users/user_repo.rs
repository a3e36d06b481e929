//! # MongoDB 사용자 리포지토리 구현
//!
//! [`UserStore`]의 운영 구현체입니다. `users` 컬렉션에 대한 CRUD 연산을
//! MongoDB 드라이버로 그대로 위임합니다.
//!
//! ## 특징
//!
//! - **저장소 위임 제약**: 이메일 유니크 인덱스(`email_unique`)
//! - **삽입 순서 유지**: 전체 조회는 정렬 없이 자연 순서로 반환

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::users::User;
use super::{parse_user_id, require_id, StoreError, UserStore};

/// 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let created = repo.insert(user).await?;
/// let found = repo.find_by_id(&created.id_string().unwrap_or_default()).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// 사용자 컬렉션 이름
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    /// 이미 같은 인덱스가 있으면 아무 일도 일어나지 않습니다.
    ///
    /// # 주의사항
    ///
    /// - 기존 데이터에 중복 이메일이 있으면 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(backend_error)?;

        debug!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(backend_error)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(backend_error)?;

        cursor.try_collect().await.map_err(backend_error)
    }

    async fn insert(&self, mut user: User) -> Result<User, StoreError> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(write_error)?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<bool, StoreError> {
        let object_id = require_id(user)?;

        let result = self.collection
            .replace_one(doc! { "_id": object_id }, user)
            .await
            .map_err(write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn find_and_delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;

        self.collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(backend_error)
    }
}

fn backend_error(error: MongoError) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// 쓰기 에러 중 중복 키 위반은 [`StoreError::Duplicate`]로 구분합니다.
fn write_error(error: MongoError) -> StoreError {
    let duplicate = matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    );

    if duplicate {
        StoreError::Duplicate(error.to_string())
    } else {
        backend_error(error)
    }
}
