//! 인증 서비스 모듈
//!
//! JWT 액세스 토큰의 발급과 검증, Authorization 헤더 해석을 담당합니다.

pub mod token_service;

pub use token_service::TokenService;
