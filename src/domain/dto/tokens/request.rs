//! 토큰 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 리프레시 토큰 요청 DTO
///
/// 토큰 갱신과 로그아웃 양쪽에서 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}
