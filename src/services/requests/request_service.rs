//! # 혈액 요청 서비스 구현
//!
//! 혈액 요청의 등록, 조회, 상태 전이, 삭제를 담당합니다.
//! 등록 시 매칭 서비스를 통해 즉시 가용 헌혈자를 계산하여 응답에 포함합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::requests::{
            request::CreateBloodRequest,
            response::{BloodRequestResponse, CreateBloodRequestResponse},
        },
        entities::requests::{BloodRequest, RequestStatus},
    },
    repositories::requests::request_repo::RequestRepository,
    services::matching::matching_service::MatchingService,
};
use crate::errors::errors::AppError;

/// 혈액 요청 비즈니스 로직 서비스
#[service(name = "request")]
pub struct RequestService {
    /// 혈액 요청 리포지토리
    request_repo: Arc<RequestRepository>,

    /// 헌혈자 매칭 서비스
    matching_service: Arc<MatchingService>,
}

impl RequestService {
    /// 새 혈액 요청 등록
    ///
    /// 저장 직후 매칭되는 가용 헌혈자를 계산하여 함께 반환합니다.
    /// 매칭 결과가 비어 있어도 요청 등록은 성공입니다.
    pub async fn submit(
        &self,
        request: CreateBloodRequest,
    ) -> Result<CreateBloodRequestResponse, AppError> {
        let receiver_id = ObjectId::parse_str(&request.receiver_id)
            .map_err(|_| AppError::ValidationError("Invalid receiver id format".to_string()))?;

        let blood_group = crate::domain::entities::persons::BloodGroup::parse(
            &request.blood_group_needed,
        )
        .ok_or_else(|| AppError::ValidationError("Invalid blood group".to_string()))?;

        let entity = BloodRequest::new(
            receiver_id,
            request.receiver_name.trim().to_string(),
            request.receiver_email.trim().to_lowercase(),
            request.receiver_phone.trim().to_string(),
            blood_group,
            request.city.trim().to_string(),
        );

        let created = self.request_repo.create(entity).await?;

        let matching_donors = self.matching_service.matching_donors_for(&created).await?;

        log::info!(
            "🩸 혈액 요청 등록: {} / {} (매칭 헌혈자 {}명)",
            created.blood_group_needed,
            created.city,
            matching_donors.len()
        );

        Ok(CreateBloodRequestResponse::new(created, matching_donors))
    }

    /// 전체 혈액 요청 목록 (최신 순)
    pub async fn list_all(&self) -> Result<Vec<BloodRequestResponse>, AppError> {
        let requests = self.request_repo.find_all().await?;
        Ok(requests.into_iter().map(BloodRequestResponse::from).collect())
    }

    /// 특정 수혈자의 요청 목록 (최신 순)
    pub async fn list_by_receiver(
        &self,
        receiver_id: &str,
    ) -> Result<Vec<BloodRequestResponse>, AppError> {
        let requests = self.request_repo.find_by_receiver(receiver_id).await?;
        Ok(requests.into_iter().map(BloodRequestResponse::from).collect())
    }

    /// 요청 상태 전이
    ///
    /// 전이 테이블(pending → fulfilled/cancelled)을 위반하면 409를 반환합니다.
    /// 실제 변경은 현재 상태를 조건으로 하는 원자적 업데이트로 수행되어
    /// 동시 변경 경합에서도 전이 규칙이 유지됩니다.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<BloodRequestResponse, AppError> {
        let target = RequestStatus::parse(status)
            .ok_or_else(|| AppError::ValidationError("Invalid status value".to_string()))?;

        let current = self
            .request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blood request not found".to_string()))?;

        if !current.status.can_transition_to(target) {
            return Err(AppError::ConflictError(format!(
                "Cannot change status from {} to {}",
                current.status, target
            )));
        }

        let updated = self
            .request_repo
            .update_status(id, current.status, target)
            .await?
            // 조회와 업데이트 사이에 다른 요청이 상태를 바꾼 경우
            .ok_or_else(|| {
                AppError::ConflictError("Request status was changed concurrently".to_string())
            })?;

        Ok(BloodRequestResponse::from(updated))
    }

    /// 혈액 요청 삭제 (관리자 전용 경로)
    pub async fn delete(&self, id: &str) -> Result<BloodRequestResponse, AppError> {
        let deleted = self
            .request_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blood request not found".to_string()))?;

        Ok(BloodRequestResponse::from(deleted))
    }
}
