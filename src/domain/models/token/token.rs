//! JWT 인증 토큰 구조체 및 페어링 된 세트
use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;

use crate::domain::entities::persons::PersonRole;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `role`: 사용자 역할
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 역할
    pub role: PersonRole,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰, 선택사항)
    pub refresh_token: Option<String>,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

/// Redis에 저장되는 리프레시 세션 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSession {
    /// 세션 소유 사용자 ID
    pub person_id: String,
    /// 세션 생성 시간
    pub created_at: DateTime,
}

impl RefreshSession {
    pub fn new(person_id: String) -> Self {
        Self {
            person_id,
            created_at: DateTime::now(),
        }
    }
}
