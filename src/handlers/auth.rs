//! # Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/register` | 회원가입 | 201 Created |
//! | `POST` | `/api/login` | 로그인 (토큰 발급) | 200 OK |
//! | `POST` | `/api/refresh` | 토큰 갱신 | 200 OK |
//! | `POST` | `/api/logout` | 로그아웃 (세션 폐기) | 200 OK |

use actix_web::{post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::persons::{
        request::{LoginRequest, RegisterRequest},
        response::LoginResponse,
    },
    domain::dto::tokens::request::RefreshTokenRequest,
    services::auth::token_service::TokenService,
    services::persons::person_service::PersonService,
};
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// 역할이 donor인 경우 혈액형과 나이가 필수입니다.
/// 이메일 중복 시 409를 반환합니다.
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PersonService::instance();
    let person = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Registration successful",
        "user": person,
    })))
}

/// 로그인 핸들러
///
/// 알 수 없는 이메일은 404, 비밀번호 불일치는 401을 반환합니다.
/// 성공 시 액세스/리프레시 토큰과 사용자 정보를 함께 반환합니다.
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let person_service = PersonService::instance();
    let person = person_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token_service = TokenService::instance();
    let token_pair = token_service.generate_token_pair(&person).await?;

    let response = LoginResponse::new(
        person,
        token_pair.access_token,
        token_pair.expires_in,
        token_pair.refresh_token,
    );

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successful",
        "data": response,
    })))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 세션을 회전하여 새 토큰 쌍을 발급합니다.
#[post("/refresh")]
pub async fn refresh(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();

    // 세션 소유자 확인을 위해 클레임의 사용자를 먼저 조회
    let claims = token_service.verify_token(&payload.refresh_token)?;
    let person_service = PersonService::instance();
    let person = person_service
        .get_person(&claims.sub)
        .await
        .map_err(mask_missing_person)?;

    let token_pair = token_service.refresh(&payload.refresh_token, &person).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Token refreshed",
        "data": token_pair,
    })))
}

/// 갱신 경로에서 삭제된 사용자를 토큰 오류로 변환
///
/// 리프레시 토큰의 주인이 더 이상 존재하지 않는 경우,
/// 리소스 부재(404)가 아닌 인증 실패(401)로 응답합니다.
fn mask_missing_person(error: AppError) -> AppError {
    match error {
        AppError::NotFound(_) => {
            AppError::AuthenticationError("Invalid refresh token".to_string())
        }
        other => other,
    }
}

/// 로그아웃 핸들러
///
/// 리프레시 세션을 폐기합니다. 이미 만료된 세션이어도 성공으로 처리합니다.
#[post("/logout")]
pub async fn logout(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();
    token_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_treats_deleted_person_as_invalid_token() {
        let masked = mask_missing_person(AppError::NotFound("User not found".to_string()));
        assert!(matches!(masked, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_refresh_keeps_other_errors_unchanged() {
        let passed = mask_missing_person(AppError::DatabaseError("timeout".to_string()));
        assert!(matches!(passed, AppError::DatabaseError(_)));
    }
}
