//! # 사용자 관리 서비스 구현
//!
//! 다섯 가지 사용자 작업(단건 조회, 전체 조회, 생성, 수정, 삭제)을
//! 저장소 호출로 옮기고, 결과를 [`AppError`] 분류로 변환합니다.
//!
//! ## 에러 분류
//!
//! 같은 저장소 에러라도 작업에 따라 응답 코드가 다릅니다.
//!
//! | 작업 | 저장소/변환 실패 | 대상 없음 |
//! |------|------------------|-----------|
//! | 단건 조회 | 500 `DatabaseError` | 404 |
//! | 전체 조회 | 500 `DatabaseError` | - |
//! | 생성 | 400 `ValidationError` | - |
//! | 수정 | 400 `ValidationError` | 404 |
//! | 삭제 | 500 `DatabaseError` | 404 |

use std::sync::Arc;
use log::{error, info, warn};
use crate::{
    domain::dto::users::{UserPayload, UserResponse},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 생성 시 주입되며, 서비스는 `web::Data`로 모든 워커가 공유합니다.
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
/// let service = web::Data::new(UserService::new(store));
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 문서
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::DatabaseError)` - 잘못된 ID 형식 또는 저장소 오류
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.store
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("사용자 조회 실패 ({}): {}", id, e);
                AppError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                warn!("사용자 없음: {}", id);
                AppError::user_not_found()
            })?;

        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 조회
    ///
    /// 정렬 없이 저장소가 반환하는 순서(삽입 순서)를 그대로 따릅니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.store.find_all().await.map_err(|e| {
            error!("사용자 목록 조회 실패: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 새 사용자 생성
    ///
    /// 요청 값을 엔티티로 변환하고 스키마 검증 후 저장합니다.
    /// 변환, 검증, 저장 중 어떤 실패든 `ValidationError`(400)입니다.
    pub async fn create_user(&self, payload: UserPayload) -> AppResult<UserResponse> {
        let user = payload
            .into_user()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        user.check_schema().map_err(AppError::ValidationError)?;

        let created = self.store
            .insert(user)
            .await
            .map_err(|e| {
                error!("사용자 생성 실패: {}", e);
                AppError::ValidationError(e.to_string())
            })?;

        info!("사용자 생성: {}", created.id_string().unwrap_or_default());
        Ok(UserResponse::from(created))
    }

    /// 사용자 정보 수정
    ///
    /// 기존 문서를 읽어 truthy 값만 병합한 뒤 문서 전체를 다시 저장합니다.
    /// 빈 문자열이나 `0`, `false`로는 기존 값을 지울 수 없습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자 문서
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::ValidationError)` - 잘못된 ID, 변환/검증/저장 실패
    pub async fn update_user(&self, id: &str, payload: UserPayload) -> AppResult<UserResponse> {
        let mut user = self.store
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("수정할 사용자 조회 실패 ({}): {}", id, e);
                AppError::ValidationError(e.to_string())
            })?
            .ok_or_else(|| {
                warn!("수정할 사용자 없음: {}", id);
                AppError::user_not_found()
            })?;

        payload
            .merge_into(&mut user)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        user.check_schema().map_err(AppError::ValidationError)?;

        let saved = self.store
            .save(&user)
            .await
            .map_err(|e| {
                error!("사용자 저장 실패 ({}): {}", id, e);
                AppError::ValidationError(e.to_string())
            })?;

        // 조회와 저장 사이에 삭제된 경우
        if !saved {
            return Err(AppError::user_not_found());
        }

        info!("사용자 수정: {}", id);
        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 조회와 삭제를 한 번의 저장소 호출로 수행합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let deleted = self.store.find_and_delete(id).await.map_err(|e| {
            error!("사용자 삭제 실패 ({}): {}", id, e);
            AppError::DatabaseError(e.to_string())
        })?;

        if deleted.is_none() {
            warn!("삭제할 사용자 없음: {}", id);
            return Err(AppError::user_not_found());
        }

        info!("사용자 삭제: {}", id);
        Ok(())
    }
}
