//! # Donor HTTP Handlers
//!
//! 헌혈자 검색, 조회, 수정, 삭제, 알림 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 권한 |
//! |--------|------|------|------|
//! | `GET` | `/api/donors` | 헌혈자 목록 (선택적 필터) | 공개 |
//! | `GET` | `/api/donors/available` | 가용 헌혈자 검색 (필터 필수) | 공개 |
//! | `GET` | `/api/donor/{id}` | 헌혈자 단건 조회 | 공개 |
//! | `PUT` | `/api/donor/{id}/availability` | 가용 여부 변경 | 본인 또는 관리자 |
//! | `PUT` | `/api/donor/{id}` | 프로필 수정 | 관리자 |
//! | `DELETE` | `/api/donor/{id}` | 헌혈자 삭제 | 관리자 |
//! | `GET` | `/api/donor-notifications/{donorId}` | 매칭 알림 조회 | 본인 또는 관리자 |

use actix_web::{delete, get, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::persons::request::{
        DonorSearchQuery, UpdateAvailabilityRequest, UpdateProfileRequest,
    },
    domain::dto::requests::response::BloodRequestResponse,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    services::matching::matching_service::MatchingService,
    services::persons::person_service::PersonService,
};
use crate::errors::errors::AppError;

/// 헌혈자 목록 조회 핸들러
///
/// 혈액형과 도시 필터는 각각 선택 사항이며 최신 가입 순으로 반환합니다.
#[get("/donors")]
pub async fn list_donors(
    query: web::Query<DonorSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PersonService::instance();
    let donors = service
        .list_donors(query.blood_group.as_deref(), query.city.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": donors.len(),
        "donors": donors,
    })))
}

/// 가용 헌혈자 검색 핸들러
///
/// 혈액형과 도시가 모두 필요하며, 누락 시 400을 반환합니다.
/// 결과는 이름 오름차순입니다.
#[get("/donors/available")]
pub async fn list_available_donors(
    query: web::Query<DonorSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let blood_group = query.blood_group.as_deref().ok_or_else(|| {
        AppError::ValidationError("bloodGroup and city are required".to_string())
    })?;
    let city = query.city.as_deref().ok_or_else(|| {
        AppError::ValidationError("bloodGroup and city are required".to_string())
    })?;

    let service = PersonService::instance();
    let donors = service.list_available_donors(blood_group, city).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": donors.len(),
        "donors": donors,
    })))
}

/// 헌혈자 단건 조회 핸들러
///
/// 존재하지 않거나 헌혈자가 아닌 ID는 404를 반환합니다.
#[get("/donor/{donor_id}")]
pub async fn get_donor(
    donor_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PersonService::instance();
    let donor = service.get_donor(&donor_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "donor": donor,
    })))
}

/// 헌혈자 가용 여부 변경 핸들러
///
/// 본인 또는 관리자만 변경할 수 있습니다.
#[put("/donor/{donor_id}/availability")]
pub async fn update_availability(
    donor_id: web::Path<String>,
    payload: web::Json<UpdateAvailabilityRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.can_access(&donor_id) {
        return Err(AppError::AuthorizationError(
            "You can only update your own availability".to_string(),
        ));
    }

    let service = PersonService::instance();
    let donor = service
        .update_availability(&donor_id, payload.is_available)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Availability updated",
        "donor": donor,
    })))
}

/// 헌혈자 프로필 수정 핸들러 (관리자 전용)
///
/// 이메일, 비밀번호, 역할은 이 경로로 변경할 수 없습니다.
#[put("/donor/{donor_id}")]
pub async fn update_donor(
    donor_id: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PersonService::instance();
    let donor = service
        .update_profile(&donor_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Donor updated",
        "donor": donor,
    })))
}

/// 헌혈자 삭제 핸들러 (관리자 전용)
///
/// 삭제된 헌혈자 정보를 함께 반환합니다.
#[delete("/donor/{donor_id}")]
pub async fn delete_donor(
    donor_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    let service = PersonService::instance();
    let donor = service.delete_donor(&donor_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Donor deleted",
        "donor": donor,
    })))
}

/// 헌혈자 알림 조회 핸들러
///
/// 헌혈자의 혈액형/도시와 매칭되는 대기 중 요청을 최신 순으로 반환합니다.
/// 가용하지 않은 헌혈자는 매칭 계산 없이 빈 목록과 안내 메시지를 받습니다.
#[get("/donor-notifications/{donor_id}")]
pub async fn donor_notifications(
    donor_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.can_access(&donor_id) {
        return Err(AppError::AuthorizationError(
            "You can only view your own notifications".to_string(),
        ));
    }

    let service = MatchingService::instance();
    let result = service.notifications_for_donor(&donor_id).await?;

    if !result.available {
        return Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Donor is not available",
            "notifications": [],
        })));
    }

    let notifications: Vec<BloodRequestResponse> = result
        .notifications
        .into_iter()
        .map(BloodRequestResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": notifications.len(),
        "notifications": notifications,
    })))
}
