//! 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자 엔티티를 보관합니다. ID 기준 기본 저장소와
//! 사용자명 유니크 인덱스를 함께 유지하며, 두 맵은 하나의 `RwLock` 아래에서 갱신됩니다.
//!
//! 프로세스가 재시작되면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;
use crate::domain::entities::users::User;
use crate::errors::AppError;

#[derive(Default)]
struct UserStore {
    by_id: HashMap<Uuid, User>,
    // 소문자 사용자명 -> ID
    by_username: HashMap<String, Uuid>,
}

/// 사용자 저장소
#[derive(Default)]
pub struct UserRepository {
    store: RwLock<UserStore>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    /// 사용자명으로 조회합니다. 대소문자를 구분하지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let store = self.read()?;

        Ok(store
            .by_username
            .get(&username.to_lowercase())
            .and_then(|id| store.by_id.get(id))
            .cloned())
    }

    /// 새 사용자를 저장합니다.
    ///
    /// 동일한 사용자명(대소문자 무시)이 이미 존재하면 `ConflictError`를 반환합니다.
    pub async fn create(&self, user: User) -> Result<User, AppError> {
        let mut store = self.write()?;
        let key = user.username.to_lowercase();

        if store.by_username.contains_key(&key) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        if store.by_id.contains_key(&user.id) {
            return Err(AppError::ConflictError("이미 존재하는 사용자 ID입니다".to_string()));
        }

        store.by_username.insert(key, user.id);
        store.by_id.insert(user.id, user.clone());

        log::debug!("사용자 저장 완료: {} ({})", user.username, user.id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new_local(name.to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_create_and_find_by_id() {
        let repo = UserRepository::new();
        let created = repo.create(user("luna")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[actix_web::test]
    async fn test_find_by_username_is_case_insensitive() {
        let repo = UserRepository::new();
        let created = repo.create(user("Luna")).await.unwrap();

        let found = repo.find_by_username("lUNA").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));
    }

    #[actix_web::test]
    async fn test_duplicate_username_conflicts() {
        let repo = UserRepository::new();
        let original = repo.create(user("milo")).await.unwrap();

        let rejected = user("MILO");
        let result = repo.create(rejected.clone()).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.find_by_username("milo").await.unwrap(), Some(original));
        assert_eq!(repo.find_by_id(rejected.id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_none() {
        let repo = UserRepository::new();

        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
        assert_eq!(repo.find_by_username("ghost").await.unwrap(), None);
    }
}
