//! # Repository Layer
//!
//! 사용자 데이터 접근 계층입니다. 서비스 계층은 이 모듈을 통해서만 저장소에 접근합니다.

pub mod users;
