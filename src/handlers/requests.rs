//! # Blood Request HTTP Handlers
//!
//! 혈액 요청 등록, 조회, 상태 변경, 삭제 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 권한 |
//! |--------|------|------|------|
//! | `POST` | `/api/request-blood` | 요청 등록 + 즉시 매칭 | 본인 또는 관리자 |
//! | `GET` | `/api/requests` | 전체 요청 목록 | 관리자 |
//! | `GET` | `/api/requests/receiver/{id}` | 수혈자별 요청 목록 | 본인 또는 관리자 |
//! | `PUT` | `/api/request/{id}` | 상태 전이 | 관리자 |
//! | `DELETE` | `/api/request/{id}` | 요청 삭제 | 관리자 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::requests::request::{CreateBloodRequest, UpdateStatusRequest},
    domain::models::auth::authenticated_user::AuthenticatedUser,
    services::requests::request_service::RequestService,
};
use crate::errors::errors::AppError;

/// 혈액 요청 등록 핸들러
///
/// 여섯 필드가 모두 필수이며, 등록 직후 매칭되는 가용 헌혈자 목록과
/// 매칭 수를 함께 반환합니다. 매칭이 없어도 등록은 성공(201)입니다.
#[post("/request-blood")]
pub async fn request_blood(
    payload: web::Json<CreateBloodRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 일반 사용자는 본인 명의로만 요청 가능
    if !user.can_access(&payload.receiver_id) {
        return Err(AppError::AuthorizationError(
            "You can only submit requests for your own account".to_string(),
        ));
    }

    let service = RequestService::instance();
    let response = service.submit(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Blood request submitted",
        "request": response.request,
        "matchingDonors": response.matching_donors,
        "donorCount": response.donor_count,
    })))
}

/// 전체 혈액 요청 목록 핸들러 (관리자 전용)
#[get("/requests")]
pub async fn list_requests(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    let service = RequestService::instance();
    let requests = service.list_all().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": requests.len(),
        "requests": requests,
    })))
}

/// 수혈자별 요청 목록 핸들러
///
/// 본인 또는 관리자만 조회할 수 있습니다.
#[get("/requests/receiver/{receiver_id}")]
pub async fn list_receiver_requests(
    receiver_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.can_access(&receiver_id) {
        return Err(AppError::AuthorizationError(
            "You can only view your own requests".to_string(),
        ));
    }

    let service = RequestService::instance();
    let requests = service.list_by_receiver(&receiver_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": requests.len(),
        "requests": requests,
    })))
}

/// 요청 상태 전이 핸들러 (관리자 전용)
///
/// pending → fulfilled/cancelled 외의 전이는 409를 반환합니다.
#[put("/request/{request_id}")]
pub async fn update_request_status(
    request_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RequestService::instance();
    let request = service
        .update_status(&request_id, &payload.status)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Request status updated",
        "request": request,
    })))
}

/// 혈액 요청 삭제 핸들러 (관리자 전용)
#[delete("/request/{request_id}")]
pub async fn delete_request(
    request_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }

    let service = RequestService::instance();
    let request = service.delete(&request_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Request deleted",
        "request": request,
    })))
}
