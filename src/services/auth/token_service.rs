//! JWT 토큰 서비스
//!
//! HS256 서명 기반 액세스 토큰을 발급하고 검증합니다.
//! 검증된 클레임은 요청 범위의 [`AuthenticatedUser`]로 변환되어
//! 인증 미들웨어를 통해 핸들러에 전달됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenClaims;
use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// 액세스 토큰 발급/검증 서비스
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// 환경 변수(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)로부터 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 액세스 토큰 만료 시간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id_string(),
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }

    /// Authorization 헤더 값을 검증하여 요청 신원을 만듭니다.
    pub fn authenticate(&self, auth_header: &str) -> Result<AuthenticatedUser, AppError> {
        let token = self.extract_bearer_token(auth_header)?;
        let claims = self.verify_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID 형식이 올바르지 않습니다".to_string()))?;

        Ok(AuthenticatedUser::new(user_id, claims.roles))
    }
}
