//! # 혈액 요청 리포지토리 구현
//!
//! 혈액 요청 엔티티의 데이터 액세스 계층입니다.
//! 상태 전이는 원자적 조건부 업데이트로 처리하여 동시 변경 경합을 막습니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Regex},
    options::IndexOptions,
    IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::persons::BloodGroup,
    domain::entities::requests::{BloodRequest, RequestStatus},
    utils::string_utils::exact_match_pattern,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 혈액 요청 데이터 액세스 리포지토리
///
/// `requests` 컬렉션의 CRUD 연산과 헌혈자 알림용 매칭 쿼리를 담당합니다.
#[repository(name = "request", collection = "requests")]
pub struct RequestRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl RequestRepository {
    /// 새 혈액 요청 저장
    pub async fn create(&self, mut request: BloodRequest) -> Result<BloodRequest, AppError> {
        let result = self.collection::<BloodRequest>()
            .insert_one(&request)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        request.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(request)
    }

    /// ID로 혈액 요청 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<BloodRequest>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        self.collection::<BloodRequest>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 혈액 요청 목록 (최신 순)
    pub async fn find_all(&self) -> Result<Vec<BloodRequest>, AppError> {
        let cursor = self.collection::<BloodRequest>()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 특정 수혈자의 요청 목록 (최신 순)
    pub async fn find_by_receiver(&self, receiver_id: &str) -> Result<Vec<BloodRequest>, AppError> {
        let object_id = ObjectId::parse_str(receiver_id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let cursor = self.collection::<BloodRequest>()
            .find(doc! { "receiverId": object_id })
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 헌혈자와 매칭되는 대기 중 요청 조회
    ///
    /// 혈액형이 일치하고 도시가 대소문자 무시로 일치하는
    /// pending 상태의 요청만 최신 순으로 반환합니다.
    pub async fn find_pending_matching(
        &self,
        blood_group: BloodGroup,
        city: &str,
    ) -> Result<Vec<BloodRequest>, AppError> {
        let filter = doc! {
            "bloodGroupNeeded": blood_group.as_str(),
            "city": Bson::RegularExpression(Regex {
                pattern: exact_match_pattern(city),
                options: "i".to_string(),
            }),
            "status": RequestStatus::Pending.as_str(),
        };

        let cursor = self.collection::<BloodRequest>()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 상태 조건부 전이
    ///
    /// 현재 상태가 `from`일 때만 `to`로 변경합니다.
    /// 조건 불일치(동시 변경 포함) 시 None을 반환합니다.
    pub async fn update_status(
        &self,
        id: &str,
        from: RequestStatus,
        to: RequestStatus,
    ) -> Result<Option<BloodRequest>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<BloodRequest>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": from.as_str() },
                doc! { "$set": { "status": to.as_str() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(updated)
    }

    /// 혈액 요청 삭제
    ///
    /// 삭제된 문서를 반환합니다. 해당 ID가 없으면 None입니다.
    pub async fn delete(&self, id: &str) -> Result<Option<BloodRequest>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let deleted = self.collection::<BloodRequest>()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if deleted.is_some() {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(deleted)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<BloodRequest>();

        // 헌혈자 알림 매칭 인덱스
        let matching_index = IndexModel::builder()
            .keys(doc! { "bloodGroupNeeded": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("matching_search".to_string())
                .build())
            .build();

        // 수혈자별 조회 인덱스
        let receiver_index = IndexModel::builder()
            .keys(doc! { "receiverId": 1 })
            .options(IndexOptions::builder()
                .name("receiver_id".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([matching_index, receiver_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
