//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스 계층입니다.
//!
//! - [`users`] - 사용자 서비스 계약([`UserService`](users::UserService))과 기본 구현
//! - [`auth`] - JWT 토큰 발급 및 검증

pub mod users;
pub mod auth;
