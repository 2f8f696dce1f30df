//! 사용자 엔티티
//!
//! 저장소에 보관되는 사용자 계정의 원본 데이터입니다.
//! 비밀번호 해시를 포함하므로 외부 응답에는 항상 `UserResponse`로 변환해 사용합니다.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 기본으로 부여되는 역할
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 사용자 고유 ID
    pub id: Uuid,
    pub username: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 계정을 생성합니다. ID는 생성 시점에 발급됩니다.
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// 비밀번호 로그인이 가능한 상태인지 확인합니다.
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_active && !self.password_hash.is_empty()
    }
}
