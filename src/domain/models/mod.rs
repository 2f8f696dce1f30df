//! 요청 범위 도메인 모델

pub mod auth;
pub mod token;
