//! # Domain Layer
//!
//! 사용자 서비스의 도메인 타입을 정의합니다.
//!
//! - [`entities`] - 저장소에 보관되는 사용자 엔티티 (비밀번호 해시 포함)
//! - [`dto`] - HTTP 요청/응답 본문으로 사용되는 데이터 전송 객체
//! - [`models`] - 인증 컨텍스트와 토큰 클레임 같은 요청 범위 모델
//!
//! 엔티티는 절대 그대로 직렬화되어 클라이언트로 나가지 않으며,
//! 항상 [`UserResponse`](dto::users::response::UserResponse)로 변환됩니다.

pub mod entities;
pub mod dto;
pub mod models;
