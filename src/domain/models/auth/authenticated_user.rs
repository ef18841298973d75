use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::persons::PersonRole;
use crate::services::auth::token_service::TokenService;

/// JWT 토큰에서 추출된 사용자 정보
///
/// Authorization 헤더의 Bearer 토큰을 검증하여 생성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub person_id: String,

    /// 사용자 역할
    pub role: PersonRole,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: PersonRole) -> bool {
        self.role == role
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == PersonRole::Admin
    }

    /// 본인이거나 관리자인지 확인
    pub fn can_access(&self, person_id: &str) -> bool {
        self.is_admin() || self.person_id == person_id
    }
}

/// ActixWeb FromRequest trait 구현
///
/// Authorization 헤더에서 Bearer 토큰을 추출하고 서명과 만료를 검증합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let header = match req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
        {
            Some(header) => header,
            None => {
                return ready(Err(actix_web::error::ErrorUnauthorized(
                    "Authorization header with Bearer token is required",
                )))
            }
        };

        let token_service = TokenService::instance();

        let token = match token_service.extract_bearer_token(header) {
            Ok(token) => token,
            Err(_) => {
                return ready(Err(actix_web::error::ErrorUnauthorized(
                    "Authorization header with Bearer token is required",
                )))
            }
        };

        match token_service.verify_token(token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                person_id: claims.sub,
                role: claims.role,
            })),
            Err(_) => ready(Err(actix_web::error::ErrorUnauthorized(
                "Invalid or expired token",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_can_access_any_person() {
        let admin = AuthenticatedUser {
            person_id: "665f1c2e8b3e4a5d6c7f8a9b".to_string(),
            role: PersonRole::Admin,
        };
        assert!(admin.is_admin());
        assert!(admin.can_access("000000000000000000000000"));
    }

    #[test]
    fn test_donor_can_access_only_self() {
        let donor = AuthenticatedUser {
            person_id: "665f1c2e8b3e4a5d6c7f8a9b".to_string(),
            role: PersonRole::Donor,
        };
        assert!(!donor.is_admin());
        assert!(donor.can_access("665f1c2e8b3e4a5d6c7f8a9b"));
        assert!(!donor.can_access("000000000000000000000000"));
        assert!(donor.has_role(PersonRole::Donor));
    }
}
