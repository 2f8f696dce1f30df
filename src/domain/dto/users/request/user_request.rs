//! 회원가입/로그인 공용 요청 DTO
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 사용자명과 비밀번호로 구성된 요청 본문
///
/// 회원가입(`POST /users/register`)과 로그인(`POST /users/login`)에서 함께 사용됩니다.
/// 검증 규칙은 핸들러가 아니라 기본 서비스 구현(`AccountService`)의 회원가입 경로에서만 적용됩니다.
#[derive(Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct UserRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    pub password: String,
}

impl UserRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// 비밀번호가 로그에 남지 않도록 Debug를 직접 구현
impl std::fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}
