//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 검증에 사용되는 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키와 액세스/리프레시 토큰의 만료 시간을 관리합니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간, 리프레시 토큰 7일
/// - **프로덕션**: 액세스 토큰 15분 ~ 1시간, 리프레시 토큰 30일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// 기본값: 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// JWT 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 리프레시 토큰은 액세스 토큰을 갱신하는 데 사용되므로,
    /// 액세스 토큰보다 훨씬 긴 유효 기간을 가져야 합니다. 기본값: 7일
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_defaults() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
        if env::var("JWT_REFRESH_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 7);
        }
    }
}
