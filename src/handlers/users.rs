//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 결과 |
//! |--------|------|------|------|
//! | `POST` | `/users/register` | 회원가입 | 201 Created + Location |
//! | `POST` | `/users/login` | 로그인 (JWT 발급) | 200 OK / 401 |
//! | `GET` | `/users/me` | 현재 사용자 조회 (인증 필요) | 200 OK / 404 |
//!
//! 핸들러는 [`UserService`] 계약에만 의존하며, 구현체는 `web::Data<dyn UserService>`로
//! 주입됩니다. 서비스가 반환한 에러는 가공 없이 [`AppError`]로 전파됩니다.
//!
//! ## 신원 확인
//!
//! 현재 사용자 조회는 경로, 쿼리, 본문의 어떤 값도 사용하지 않습니다.
//! 사용자 ID는 인증 미들웨어가 검증한 토큰 클레임([`AuthenticatedUser`])에서만 가져오므로
//! 다른 사용자의 ID를 넣어 남의 정보를 조회할 수 없습니다.

use actix_web::web;
use crate::domain::dto::users::{UserRequest, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::handlers::outcome::{Outcome, ResourceLocation};
use crate::services::users::UserService;

/// 사용자 ID로 사용자를 조회하는 라우트 이름 (`Location` 생성에 사용)
pub const GET_USER_BY_ID_ROUTE: &str = "get_user_by_id";

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/register`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/register \
///   -H "Content-Type: application/json" \
///   -d '{"username":"rex","password":"Wooof1234"}'
/// ```
///
/// 성공 시 `201 Created`와 함께 `Location: .../api/v1/users/me?id={id}` 헤더와
/// 생성된 사용자를 본문으로 반환합니다.
pub async fn register(
    service: web::Data<dyn UserService>,
    payload: web::Json<UserRequest>,
) -> Result<Outcome<UserResponse>, AppError> {
    let created = service.register(payload.into_inner()).await?;

    log::info!("회원가입 완료: {}", created.id);

    Ok(Outcome::Created {
        location: ResourceLocation::new(GET_USER_BY_ID_ROUTE, created.id),
        body: created,
    })
}

/// 로그인 핸들러
///
/// 서비스가 발급한 토큰이 비어 있으면 본문 없는 `401 Unauthorized`,
/// 그렇지 않으면 토큰 문자열을 본문으로 `200 OK`를 반환합니다.
///
/// # Endpoint
/// `POST /api/v1/users/login`
pub async fn login(
    service: web::Data<dyn UserService>,
    payload: web::Json<UserRequest>,
) -> Result<Outcome<String>, AppError> {
    let token = service.login(&payload.username, &payload.password).await?;

    if token.is_empty() {
        return Ok(Outcome::Unauthorized);
    }

    Ok(Outcome::Ok(token))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/users/me` (Bearer 토큰 필요)
pub async fn get_current_user(
    service: web::Data<dyn UserService>,
    identity: AuthenticatedUser,
) -> Result<Outcome<UserResponse>, AppError> {
    match service.get_user_by_id(identity.user_id).await? {
        Some(user) => Ok(Outcome::Ok(user)),
        None => {
            log::warn!("토큰은 유효하지만 사용자가 존재하지 않습니다: {}", identity.user_id);
            Ok(Outcome::NotFound)
        }
    }
}
