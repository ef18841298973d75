//! # 리프레시 세션 리포지토리
//!
//! 리프레시 토큰 세션을 Redis에 저장하는 리포지토리입니다.
//! MongoDB 컬렉션을 사용하지 않고 TTL 기반 키로만 관리합니다.

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    domain::models::token::RefreshSession,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 리프레시 세션 저장소
///
/// 키 패턴은 `session:{refresh_token}`이며 만료는 Redis TTL로 처리됩니다.
/// 로그아웃은 세션 키 삭제와 동일합니다.
#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    /// Redis 클라이언트
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    fn session_key(refresh_token: &str) -> String {
        format!("session:{}", refresh_token)
    }

    /// 리프레시 세션 저장 (TTL 초 단위)
    pub async fn store_session(
        &self,
        refresh_token: &str,
        session: &RefreshSession,
        ttl_seconds: usize,
    ) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::session_key(refresh_token), session, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 리프레시 세션 조회
    ///
    /// 만료되었거나 로그아웃으로 삭제된 세션은 None을 반환합니다.
    pub async fn get_session(
        &self,
        refresh_token: &str,
    ) -> Result<Option<RefreshSession>, AppError> {
        self.redis
            .get::<RefreshSession>(&Self::session_key(refresh_token))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 리프레시 세션 삭제 (로그아웃, 토큰 회전)
    pub async fn delete_session(&self, refresh_token: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::session_key(refresh_token))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
