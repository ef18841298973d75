//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신을 담당하며
//! 리프레시 세션은 Redis에 저장됩니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    domain::entities::persons::Person,
    domain::models::token::{RefreshSession, TokenClaims, TokenPair},
    repositories::tokens::token_repository::TokenRepository,
};
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 리프레시 토큰은 서버 측 세션(Redis)과 함께 관리되어
/// 로그아웃 시 즉시 무효화할 수 있습니다.
#[service(name = "token")]
pub struct TokenService {
    /// 리프레시 세션 저장소
    token_repository: Arc<TokenRepository>,
}

impl TokenService {
    /// 사용자를 위한 JWT 액세스 토큰 생성
    pub fn generate_access_token(&self, person: &Person) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: person.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            role: person.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 사용자를 위한 리프레시 토큰 생성
    pub fn generate_refresh_token(&self, person: &Person) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(JwtConfig::refresh_expiration_days());

        let claims = TokenClaims {
            sub: person.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            role: person.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 리프레시 토큰은 Redis 세션으로 저장되며 TTL은 토큰 만료와 동일합니다.
    pub async fn generate_token_pair(&self, person: &Person) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(person)?;
        let refresh_token = self.generate_refresh_token(person)?;
        let expires_in = JwtConfig::expiration_hours() * 3600; // 초 단위로 변환

        let person_id = person.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let session = RefreshSession::new(person_id);
        let ttl_seconds = (JwtConfig::refresh_expiration_days() * 24 * 3600) as usize;
        self.token_repository
            .store_session(&refresh_token, &session, ttl_seconds)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 서명/만료 검증과 Redis 세션 확인을 모두 통과해야 하며,
    /// 성공 시 기존 세션을 폐기하고 새 세션으로 회전합니다.
    pub async fn refresh(&self, refresh_token: &str, person: &Person) -> Result<TokenPair, AppError> {
        let claims = self.verify_token(refresh_token)?;

        let session = self
            .token_repository
            .get_session(refresh_token)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("세션이 만료되었거나 로그아웃되었습니다".to_string())
            })?;

        if session.person_id != claims.sub {
            return Err(AppError::AuthenticationError(
                "세션 정보가 일치하지 않습니다".to_string(),
            ));
        }

        // 토큰 회전: 기존 세션 폐기 후 새 쌍 발급
        self.token_repository.delete_session(refresh_token).await?;
        self.generate_token_pair(person).await
    }

    /// 리프레시 토큰 세션 조회
    pub async fn get_session(&self, refresh_token: &str) -> Result<Option<RefreshSession>, AppError> {
        self.token_repository.get_session(refresh_token).await
    }

    /// 로그아웃 (리프레시 세션 폐기)
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        self.token_repository.delete_session(refresh_token).await
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}
