//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 JWT 검증
//! - 검증된 신원([`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser))을 request extension에 저장
//! - 실패 시 401 응답으로 요청 차단
//!
//! 토큰 검증에는 앱 데이터로 등록된 `web::Data<TokenService>`를 사용합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_env()))
//!     .service(
//!         web::resource("/me")
//!             .wrap(AuthMiddleware::required())
//!             .route(web::get().to(get_current_user))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
