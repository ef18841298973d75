//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.

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
    domain::entities::persons::{BloodGroup, Person, PersonRole},
    utils::string_utils::exact_match_pattern,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// `persons` 컬렉션의 CRUD 연산과 헌혈자 검색 쿼리를 담당합니다.
///
/// ## 캐싱 전략
///
/// - 개별 사용자: `person:{id}`, TTL 600초
/// - 이메일 조회: `person:email:{email}`, TTL 600초
/// - 쓰기 연산 후 관련 캐시 무효화
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `role` + `isAvailable` (헌혈자 검색용)
/// - `createdAt` (내림차순)
#[repository(name = "person", collection = "persons")]
pub struct PersonRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl PersonRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 저장 시 소문자로 정규화되므로 호출 측에서도
    /// 소문자로 변환하여 전달해야 합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, AppError> {
        let cache_key = format!("person:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<Person>(&cache_key).await {
            return Ok(Some(cached));
        }

        let person = self.collection::<Person>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref person) = person {
            let _ = self.redis.set_with_expiry(&cache_key, person, 600).await;
        }

        Ok(person)
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Person>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Person>(&cache_key).await {
            return Ok(Some(cached));
        }

        let person = self.collection::<Person>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref person) = person {
            let _ = self.redis.set_with_expiry(&cache_key, person, 600).await;
        }

        Ok(person)
    }

    /// 새 사용자 생성
    ///
    /// 이메일 유니크 인덱스 위반(E11000)은 ConflictError로 변환됩니다.
    pub async fn create(&self, mut person: Person) -> Result<Person, AppError> {
        let result = self.collection::<Person>()
            .insert_one(&person)
            .await
            .map_err(|e| {
                let message = e.to_string();
                if message.contains("E11000") {
                    AppError::ConflictError("User with this email already exists".to_string())
                } else {
                    AppError::DatabaseError(message)
                }
            })?;

        person.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(person)
    }

    /// 헌혈자 목록 조회 (선택적 필터)
    ///
    /// 혈액형은 정확히 일치, 도시는 대소문자 무시로 비교하며
    /// 최신 가입 순으로 정렬합니다.
    pub async fn find_donors(
        &self,
        blood_group: Option<BloodGroup>,
        city: Option<&str>,
    ) -> Result<Vec<Person>, AppError> {
        let mut filter = doc! { "role": PersonRole::Donor.as_str() };

        if let Some(group) = blood_group {
            filter.insert("bloodGroup", group.as_str());
        }
        if let Some(city) = city {
            filter.insert("city", Self::city_filter(city));
        }

        let cursor = self.collection::<Person>()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 가용 헌혈자 검색 (혈액형 + 도시 필수)
    ///
    /// `isAvailable = true`인 헌혈자만 이름 오름차순으로 반환합니다.
    pub async fn find_available_donors(
        &self,
        blood_group: BloodGroup,
        city: &str,
    ) -> Result<Vec<Person>, AppError> {
        let filter = doc! {
            "role": PersonRole::Donor.as_str(),
            "bloodGroup": blood_group.as_str(),
            "city": Self::city_filter(city),
            "isAvailable": true,
        };

        let cursor = self.collection::<Person>()
            .find(filter)
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 혈액 요청과 매칭되는 가용 헌혈자 조회
    pub async fn find_matching_donors(
        &self,
        blood_group: BloodGroup,
        city: &str,
    ) -> Result<Vec<Person>, AppError> {
        self.find_available_donors(blood_group, city).await
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// `$set` 연산으로 지정된 필드만 변경하고 최신 문서를 반환합니다.
    pub async fn update_fields(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<Person>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Person>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref person) = updated {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("person:email:{}", person.email)).await;
        }

        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// 삭제된 문서를 반환합니다. 해당 ID가 없으면 None입니다.
    pub async fn delete(&self, id: &str) -> Result<Option<Person>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let deleted = self.collection::<Person>()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref person) = deleted {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("person:email:{}", person.email)).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(deleted)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Person>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 헌혈자 검색 인덱스
        let donor_search_index = IndexModel::builder()
            .keys(doc! { "role": 1, "bloodGroup": 1, "isAvailable": 1 })
            .options(IndexOptions::builder()
                .name("donor_search".to_string())
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
            .create_indexes([email_index, donor_search_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 도시 대소문자 무시 정확 일치 필터
    ///
    /// 사용자 입력은 이스케이프되어 정규식 메타문자로 해석되지 않습니다.
    fn city_filter(city: &str) -> Bson {
        Bson::RegularExpression(Regex {
            pattern: exact_match_pattern(city),
            options: "i".to_string(),
        })
    }
}
