//! 요청 범위 인증 컨텍스트
//!
//! 인증 미들웨어가 토큰 검증에 성공하면 [`AuthenticatedUser`]를 Request Extensions에 저장하고,
//! 핸들러는 이를 추출자(extractor)로 받아 사용합니다. 핸들러는 원본 헤더나 토큰을
//! 직접 파싱하지 않습니다.
use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (`sub` 클레임)
    pub user_id: Uuid,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(user_id: Uuid, roles: Vec<String>) -> Self {
        Self { user_id, roles }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어가 신원을 채워두지 않았다면 401로 거부합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_identity_from_extensions() {
        let identity = AuthenticatedUser::new(Uuid::new_v4(), vec!["user".to_string()]);
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(identity.clone());

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted, identity);
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedUser::extract(&req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
