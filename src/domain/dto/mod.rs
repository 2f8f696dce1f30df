//! 데이터 전송 객체 (DTO)

pub mod users;

pub use users::*;
