//! 사용자 관리 서비스 모듈
//!
//! 핸들러가 의존하는 서비스 계약 [`UserService`]와 그 기본 구현 [`AccountService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pet_adoption_backend::services::users::{AccountService, UserService};
//!
//! let service: Arc<dyn UserService> = Arc::new(AccountService::new(repo, tokens));
//! let created = service.register(UserRequest::new("rex", "Wooof1234")).await?;
//! ```

pub mod user_service;
pub mod account_service;

pub use user_service::UserService;
pub use account_service::AccountService;

#[cfg(test)]
pub use user_service::MockUserService;
