//! # Redis 클라이언트 구현
//!
//! 이 모듈은 Redis를 백엔드로 하는 키-값 저장 클라이언트를 제공합니다.
//! 리프레시 토큰 세션 레코드의 저장과 만료 관리에 사용됩니다.
//!
//! ## 설계 철학
//!
//! - **타입 안전성**: Serde 기반 제네릭 직렬화로 컴파일 타임 검증
//! - **비동기 우선**: 모든 작업이 async/await 기반으로 구현
//! - **에러 처리**: Result 타입을 통한 명시적 에러 핸들링

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 클라이언트 래퍼
///
/// Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
/// 여러 동시 요청을 효율적으로 처리합니다.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis 클라이언트 인스턴스
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 환경 변수 `REDIS_URL`에서 Redis 서버 주소를 읽어오며,
    /// 설정되지 않은 경우 기본값 `redis://localhost:6379`를 사용합니다.
    /// 생성 시 PING 명령으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        println!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// JSON 으로 직렬화된 데이터를 자동으로 역직렬화하여 반환합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(RedisError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 지정된 키에 값을 저장합니다.
    ///
    /// 객체를 JSON 으로 직렬화하여 Redis에 저장합니다.
    /// TTL이 설정되지 않으므로 영구 저장됩니다.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set(key, json).await
    }

    /// 만료 시간과 함께 값을 저장합니다.
    ///
    /// 리프레시 토큰 세션처럼 수명이 정해진 데이터를 저장할 때 사용합니다.
    ///
    /// ## 인자
    ///
    /// - `key` - 저장할 Redis 키
    /// - `value` - 저장할 값
    /// - `seconds` - 만료 시간 (초 단위)
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    /// 지정된 키를 삭제합니다.
    ///
    /// 키가 없어도 성공으로 처리됩니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    ///
    /// 개별 삭제보다 네트워크 왕복이 적은 배치 삭제를 제공합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키들을 검색합니다.
    ///
    /// Redis의 KEYS 명령을 래핑하여 와일드카드 패턴으로 키를 검색합니다.
    /// KEYS 명령은 블로킹 연산이므로 대량의 키가 있는 운영 환경에서는
    /// 호출 빈도에 주의해야 합니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 기본 설정으로 RedisClient를 생성합니다.
    ///
    /// 주의: 이 메서드는 동기적이므로 실제 Redis 연결 테스트를 수행하지 않습니다.
    /// 프로덕션 환경에서는 `RedisClient::new().await`를 사용하세요.
    fn default() -> Self {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
