//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 헌혈자, 혈액 요청 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! 보호된 엔드포인트는 핸들러 시그니처의 `AuthenticatedUser` 추출자로
//! Bearer 토큰을 검증합니다. 추출자가 없는 핸들러는 공개 라우트입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // 비즈니스 라우트는 모두 /api 하위에 등록
    cfg.service(
        web::scope("/api")
            // 인증
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::logout)
            // 헌혈자
            .service(handlers::donors::list_available_donors)
            .service(handlers::donors::list_donors)
            .service(handlers::donors::update_availability)
            .service(handlers::donors::update_donor)
            .service(handlers::donors::delete_donor)
            .service(handlers::donors::get_donor)
            .service(handlers::donors::donor_notifications)
            // 혈액 요청
            .service(handlers::requests::request_blood)
            .service(handlers::requests::list_receiver_requests)
            .service(handlers::requests::list_requests)
            .service(handlers::requests::update_request_status)
            .service(handlers::requests::delete_request),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blood_donation_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
