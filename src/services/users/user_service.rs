//! # 사용자 서비스 계약
//!
//! 사용자 핸들러가 소비하는 유일한 협력자 인터페이스입니다.
//! 핸들러는 구현체를 알지 못하며 `web::Data<dyn UserService>`로 주입받습니다.
//! 테스트에서는 `mockall`이 생성하는 `MockUserService`로 대체됩니다.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;
use crate::domain::dto::users::{UserRequest, UserResponse};
use crate::errors::AppError;

/// 사용자 관리 서비스 계약
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// 새 사용자를 등록하고 생성된 사용자를 반환합니다.
    async fn register(&self, request: UserRequest) -> Result<UserResponse, AppError>;

    /// 자격 증명을 확인하고 액세스 토큰을 발급합니다.
    ///
    /// 인증에 실패하면 `Ok` 안에 빈 문자열을 반환합니다. 빈 토큰만이 인증 실패 신호이며,
    /// `Err`는 서비스 자체의 오작동(해싱/서명 실패 등)을 의미합니다.
    async fn login(&self, username: &str, password: &str) -> Result<String, AppError>;

    /// ID로 사용자를 조회합니다. 없으면 `None`.
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<UserResponse>, AppError>;
}
