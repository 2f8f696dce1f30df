//! 인증 관련 설정
//!
//! JWT 액세스 토큰 서명과 만료 정책을 환경 변수에서 읽어옵니다.

use std::env;

/// JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 비밀키 (`JWT_SECRET`)
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (`JWT_EXPIRATION_HOURS`, 기본값 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24)
    }
}
