use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 공개 프로필 정보입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            roles,
            is_active,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            roles,
            is_active,
            created_at,
            updated_at,
        }
    }
}
