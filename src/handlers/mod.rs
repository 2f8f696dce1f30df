//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현된 Web Layer이며,
//! 서비스 계층의 결과를 HTTP 결과로 변환하는 역할만 수행합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - Bearer 토큰 → 신원
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - Outcome 변환              ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   dyn UserService - 비즈니스 로직                 ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입, 로그인, 현재 사용자 조회
//! - **`outcome`**: 핸들러 결과 범주와 HTTP 응답 변환

pub mod outcome;
pub mod users;

pub use outcome::{Outcome, ResourceLocation};
