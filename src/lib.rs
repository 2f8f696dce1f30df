//! 펫 입양 시스템 사용자 서비스 백엔드
//!
//! 회원가입, 로그인(JWT 발급), 현재 사용자 조회를 제공하는 Actix-web 기반 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← Bearer 토큰 → AuthenticatedUser
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 서비스 결과 → Outcome → HTTP 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ dyn UserService │ ← 비즈니스 로직 (기본 구현: AccountService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 사용자 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pet_adoption_backend::repositories::users::UserRepository;
//! use pet_adoption_backend::services::auth::TokenService;
//! use pet_adoption_backend::services::users::{AccountService, UserService};
//!
//! let tokens = Arc::new(TokenService::from_env());
//! let service: Arc<dyn UserService> =
//!     Arc::new(AccountService::new(Arc::new(UserRepository::new()), tokens.clone()));
//! ```

pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
