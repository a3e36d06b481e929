//! 메모리 기반 사용자 저장소 (테스트 전용)
//!
//! MongoDB 없이 핸들러와 서비스를 검증하기 위한 [`UserStore`] 구현입니다.
//! 삽입 순서를 유지하고, 이메일 유니크 제약을 흉내냅니다.

use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::User;
use super::{parse_user_id, require_id, StoreError, UserStore};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    failure: Option<String>,
    save_failure: Option<String>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 연산이 주어진 메시지의 [`StoreError::Backend`]로 실패하는 저장소
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// 조회, 삽입, 삭제는 정상 동작하고 `save`만 실패하는 저장소
    pub fn failing_saves(message: &str) -> Self {
        Self {
            save_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn users(&self) -> Result<MutexGuard<'_, Vec<User>>, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Backend(message.clone()));
        }

        self.users
            .lock()
            .map_err(|_| StoreError::Backend("user store lock poisoned".to_string()))
    }

    fn check_unique_email(users: &[User], candidate: &User) -> Result<(), StoreError> {
        let Some(email) = candidate.email.as_deref() else {
            return Ok(());
        };

        let taken = users
            .iter()
            .any(|user| user.id != candidate.id && user.email.as_deref() == Some(email));

        if taken {
            return Err(StoreError::Duplicate(format!(
                "E11000 duplicate key error collection: users index: email_unique dup key: {{ email: \"{}\" }}",
                email
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;
        let users = self.users()?;

        Ok(users.iter().find(|user| user.id == Some(object_id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users()?.clone())
    }

    async fn insert(&self, mut user: User) -> Result<User, StoreError> {
        let mut users = self.users()?;

        user.id = Some(ObjectId::new());
        Self::check_unique_email(&users, &user)?;
        users.push(user.clone());

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<bool, StoreError> {
        let object_id = require_id(user)?;
        let mut users = self.users()?;

        if let Some(message) = &self.save_failure {
            return Err(StoreError::Backend(message.clone()));
        }

        Self::check_unique_email(&users, user)?;

        match users.iter_mut().find(|stored| stored.id == Some(object_id)) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_and_delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let object_id = parse_user_id(id)?;
        let mut users = self.users()?;

        let position = users.iter().position(|user| user.id == Some(object_id));
        Ok(position.map(|index| users.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User {
            name: Some("Test".to_string()),
            email: Some(email.to_string()),
            password: Some("secret".to_string()),
            ..User::default()
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_keeps_order() {
        let store = InMemoryUserStore::new();

        let first = store.insert(user("a@example.com")).await.expect("insert a");
        let second = store.insert(user("b@example.com")).await.expect("insert b");

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);

        let all = store.find_all().await.expect("find all");
        assert_eq!(all, vec![first, second]);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(user("a@example.com")).await.expect("first insert");

        let result = store.insert(user("a@example.com")).await;

        assert!(matches!(result, Err(StoreError::Duplicate(_))));
    }

    #[actix_web::test]
    async fn test_failing_store() {
        let store = InMemoryUserStore::failing("connection refused");

        assert_eq!(
            store.find_all().await,
            Err(StoreError::Backend("connection refused".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_failing_saves_only_breaks_save() {
        let store = InMemoryUserStore::failing_saves("write concern error");

        let created = store.insert(user("a@example.com")).await.expect("insert");
        let id = created.id_string().expect("id");

        assert_eq!(store.find_by_id(&id).await, Ok(Some(created.clone())));
        assert_eq!(
            store.save(&created).await,
            Err(StoreError::Backend("write concern error".to_string()))
        );
    }
}
