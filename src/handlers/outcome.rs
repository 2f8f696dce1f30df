//! 요청 처리 결과(Outcome)
//!
//! 핸들러 결과를 전송 계층과 무관한 범주로 표현하고, [`Responder`] 구현을 통해
//! HTTP 응답으로 변환합니다.
//!
//! | Outcome | HTTP |
//! |---------|------|
//! | `Created` | 201 Created + `Location` + JSON 본문 (Location 생성 실패 시 500) |
//! | `Ok` | 200 OK + JSON 본문 |
//! | `Unauthorized` | 401, 본문 없음 |
//! | `NotFound` | 404, 본문 없음 |

use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use uuid::Uuid;

/// 생성된 리소스를 조회할 수 있는 위치
///
/// `route`는 라우트 이름, `id`는 라우트 파라미터 `id`에 바인딩되는 값입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLocation {
    pub route: &'static str,
    pub id: Uuid,
}

impl ResourceLocation {
    pub fn new(route: &'static str, id: Uuid) -> Self {
        Self { route, id }
    }

    /// 이름 붙은 라우트의 URL에 `id` 쿼리 파라미터를 붙여 Location 값을 만듭니다.
    pub fn resolve(&self, req: &HttpRequest) -> Result<String, actix_web::error::UrlGenerationError> {
        let mut url = req.url_for_static(self.route)?;
        url.set_query(Some(&format!("id={}", self.id)));
        Ok(url.to_string())
    }
}

/// 핸들러 처리 결과
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Created { location: ResourceLocation, body: T },
    Ok(T),
    Unauthorized,
    NotFound,
}

impl<T: Serialize> Responder for Outcome<T> {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            // `location.route`는 앱에 등록된 라우트 이름이어야 합니다.
            Outcome::Created { location, body } => match location.resolve(req) {
                Ok(url) => HttpResponse::Created()
                    .insert_header((header::LOCATION, url))
                    .json(body),
                Err(e) => {
                    log::error!("Location 생성 실패 ({}): {}", location.route, e);
                    HttpResponse::InternalServerError().finish()
                }
            },
            Outcome::Ok(body) => HttpResponse::Ok().json(body),
            Outcome::Unauthorized => HttpResponse::Unauthorized().finish(),
            Outcome::NotFound => HttpResponse::NotFound().finish(),
        }
    }
}
