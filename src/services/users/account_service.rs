//! # 기본 사용자 서비스 구현
//!
//! [`UserService`] 계약의 기본 구현입니다.
//!
//! ```text
//! AccountService
//!   ├── register        : 입력 검증 → bcrypt 해싱 → 저장
//!   ├── login           : 사용자명 조회 → bcrypt 검증 → JWT 발급
//!   └── get_user_by_id  : 저장소 조회 → DTO 변환
//!         │
//!         ▼
//! UserRepository (in-memory) + TokenService (HS256)
//! ```
//!
//! ## 보안 특징
//!
//! - 환경별 bcrypt cost (개발/테스트 4, 스테이징 10, 운영 12)
//! - 존재하지 않는 사용자, 비활성 계정, 잘못된 비밀번호를 구분하지 않고 모두 빈 토큰으로 응답
//! - 비밀번호는 어떤 로그에도 기록되지 않음
//! - bcrypt 입력 한도(72바이트)를 넘는 비밀번호는 잘라내지 않고 거부

use std::sync::Arc;
use async_trait::async_trait;
use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};
use uuid::Uuid;
use validator::Validate;
use crate::config::PasswordConfig;
use crate::domain::dto::users::{UserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;
use super::user_service::UserService;

/// 사용자 관리 비즈니스 로직 서비스
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AccountService {
    /// 환경 설정의 bcrypt cost를 사용하는 서비스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self::with_bcrypt_cost(user_repo, token_service, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(
        user_repo: Arc<UserRepository>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
        }
    }
}

#[async_trait]
impl UserService for AccountService {
    async fn register(&self, request: UserRequest) -> Result<UserResponse, AppError> {
        let start_time = std::time::Instant::now();

        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let password_hash = match non_truncating_hash(&request.password, self.bcrypt_cost) {
            Ok(hashed) => hashed,
            Err(BcryptError::Truncation(_)) => {
                return Err(AppError::ValidationError(
                    "비밀번호가 허용 길이(72바이트)를 초과합니다".to_string(),
                ));
            }
            Err(e) => return Err(e).context("비밀번호 해싱 실패"),
        };

        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = User::new_local(request.username, password_hash);
        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "사용자 등록 완료: {} ({}), took {:?}",
            created_user.username,
            created_user.id,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", username);
                return Ok(String::new());
            }
        };

        if !user.can_authenticate_with_password() {
            log::warn!("로그인 실패 - 비활성 계정: {}", user.id);
            return Ok(String::new());
        }

        let is_valid = match non_truncating_verify(password, &user.password_hash) {
            Ok(is_valid) => is_valid,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => {
                return Err(e).with_context(|| format!("비밀번호 검증 실패 (사용자 {})", user.id));
            }
        };

        if !is_valid {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", user.id);
            return Ok(String::new());
        }

        let token = self.token_service.generate_access_token(&user)?;
        log::info!(
            "로그인 성공: {} ({}), 토큰 유효시간 {}초",
            user.username,
            user.id,
            self.token_service.expires_in()
        );

        Ok(token)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<UserResponse>, AppError> {
        let user = self.user_repo.find_by_id(id).await?;

        if user.is_none() {
            log::debug!("사용자 조회 결과 없음: {}", id);
        }

        Ok(user.map(UserResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (AccountService, Arc<TokenService>) {
        let (service, tokens, _) = service_with_repo();
        (service, tokens)
    }

    fn service_with_repo() -> (AccountService, Arc<TokenService>, Arc<UserRepository>) {
        let repo = Arc::new(UserRepository::new());
        let tokens = Arc::new(TokenService::new("account-test-secret", 1));
        let service = AccountService::with_bcrypt_cost(repo.clone(), tokens.clone(), 4);
        (service, tokens, repo)
    }

    #[actix_web::test]
    async fn test_register_returns_created_user() {
        let (service, _) = service();

        let created = service.register(UserRequest::new("buddy", "G00dBoy!!")).await.unwrap();

        assert_eq!(created.username, "buddy");
        assert_eq!(created.roles, vec!["user".to_string()]);
        assert!(created.is_active);

        let fetched = service.get_user_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_input() {
        let (service, _) = service();

        let result = service.register(UserRequest::new("x", "short")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_conflicts() {
        let (service, _) = service();
        service.register(UserRequest::new("buddy", "G00dBoy!!")).await.unwrap();

        let result = service.register(UserRequest::new("Buddy", "0ther Pass")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_login_issues_token_for_valid_credentials() {
        let (service, tokens) = service();
        let created = service.register(UserRequest::new("buddy", "G00dBoy!!")).await.unwrap();

        let token = service.login("buddy", "G00dBoy!!").await.unwrap();

        assert!(!token.is_empty());
        let identity = tokens.authenticate(&format!("Bearer {}", token)).unwrap();
        assert_eq!(identity.user_id, created.id);
    }

    #[actix_web::test]
    async fn test_login_wrong_password_returns_empty_token() {
        let (service, _) = service();
        service.register(UserRequest::new("buddy", "G00dBoy!!")).await.unwrap();

        let token = service.login("buddy", "BadBoy!!!").await.unwrap();
        assert!(token.is_empty());
    }

    #[actix_web::test]
    async fn test_login_unknown_user_returns_empty_token() {
        let (service, _) = service();

        let token = service.login("nobody", "whatever1").await.unwrap();
        assert!(token.is_empty());
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_none() {
        let (service, _) = service();

        assert_eq!(service.get_user_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_register_rejects_password_beyond_bcrypt_limit() {
        let (service, _) = service();
        let password = format!("{}REAL", "a".repeat(72));

        let result = service.register(UserRequest::new("longpw", password)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(service.login("longpw", &"a".repeat(72)).await.unwrap(), "");
    }

    #[actix_web::test]
    async fn test_login_does_not_truncate_long_password() {
        let (service, _, repo) = service_with_repo();
        let prefix = "a".repeat(72);
        let password_hash = bcrypt::hash(&prefix, 4).unwrap();
        repo.create(User::new_local("longpw".to_string(), password_hash)).await.unwrap();

        let token = service.login("longpw", &format!("{}WRONG", prefix)).await.unwrap();
        assert!(token.is_empty());
    }

    #[actix_web::test]
    async fn test_login_inactive_account_returns_empty_token() {
        let (service, _, repo) = service_with_repo();
        let password_hash = bcrypt::hash("G00dBoy!!", 4).unwrap();
        let mut user = User::new_local("sleepy".to_string(), password_hash);
        user.is_active = false;
        repo.create(user).await.unwrap();

        let token = service.login("sleepy", "G00dBoy!!").await.unwrap();
        assert!(token.is_empty());
    }
}
