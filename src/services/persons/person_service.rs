//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인 검증, 헌혈자 조회/수정/삭제의
//! 비즈니스 로직을 담당합니다.
//!
//! ## 보안 설계
//!
//! - 비밀번호는 bcrypt로 해싱하며 cost는 환경별로 다릅니다
//! - 이메일은 소문자로 정규화하여 저장합니다
//! - 응답 DTO 변환 시 비밀번호 해시는 제외됩니다

use std::sync::Arc;
use bcrypt::{hash, verify};
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    domain::{
        dto::persons::{
            request::{RegisterRequest, UpdateProfileRequest},
            response::PersonResponse,
        },
        entities::persons::{BloodGroup, Person, PersonRole},
    },
    repositories::persons::person_repo::PersonRepository,
};
use crate::errors::errors::AppError;

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며
/// PersonRepository가 자동으로 주입됩니다.
#[service(name = "person")]
pub struct PersonService {
    /// 사용자 데이터 액세스 리포지토리
    person_repo: Arc<PersonRepository>,
}

impl PersonService {
    /// 새 사용자 등록
    ///
    /// 입력 검증은 DTO 계층에서 완료된 상태로 전달됩니다.
    /// 이메일 중복은 유니크 인덱스 위반으로 감지되어 ConflictError가 됩니다.
    pub async fn register(&self, request: RegisterRequest) -> Result<PersonResponse, AppError> {
        let role = PersonRole::parse(&request.role)
            .ok_or_else(|| AppError::ValidationError("Invalid role".to_string()))?;

        let blood_group = match request.blood_group.as_deref() {
            Some(value) => Some(
                BloodGroup::parse(value)
                    .ok_or_else(|| AppError::ValidationError("Invalid blood group".to_string()))?,
            ),
            None => None,
        };

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let person = Person::new(
            request.name.trim().to_string(),
            request.email.trim().to_lowercase(),
            password_hash,
            role,
            request.phone.trim().to_string(),
            request.city.trim().to_string(),
            blood_group,
            request.age,
            request.is_available,
        );

        let created = self.person_repo.create(person).await?;

        log::info!("✅ 새 사용자 등록: {} ({})", created.email, created.role);

        Ok(PersonResponse::from(created))
    }

    /// 로그인 자격 증명 검증
    ///
    /// 알 수 없는 이메일은 404, 비밀번호 불일치는 401을 반환합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Person, AppError> {
        let normalized = email.trim().to_lowercase();

        let person = self
            .person_repo
            .find_by_email(&normalized)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let valid = verify(password, &person.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", normalized);
            return Err(AppError::AuthenticationError(
                "Invalid credentials".to_string(),
            ));
        }

        Ok(person)
    }

    /// ID로 사용자 조회
    pub async fn get_person(&self, id: &str) -> Result<Person, AppError> {
        self.person_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// ID로 헌혈자 조회
    ///
    /// 존재하지 않거나 헌혈자가 아닌 경우 404를 반환합니다.
    pub async fn get_donor(&self, id: &str) -> Result<PersonResponse, AppError> {
        let person = self
            .person_repo
            .find_by_id(id)
            .await?
            .filter(Person::is_donor)
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        Ok(PersonResponse::from(person))
    }

    /// 헌혈자 목록 조회 (선택적 혈액형/도시 필터)
    pub async fn list_donors(
        &self,
        blood_group: Option<&str>,
        city: Option<&str>,
    ) -> Result<Vec<PersonResponse>, AppError> {
        let blood_group = match blood_group {
            Some(value) => Some(
                BloodGroup::parse(value)
                    .ok_or_else(|| AppError::ValidationError("Invalid blood group".to_string()))?,
            ),
            None => None,
        };

        let donors = self.person_repo.find_donors(blood_group, city).await?;

        Ok(donors.into_iter().map(PersonResponse::from).collect())
    }

    /// 가용 헌혈자 검색 (혈액형과 도시 모두 필수)
    pub async fn list_available_donors(
        &self,
        blood_group: &str,
        city: &str,
    ) -> Result<Vec<PersonResponse>, AppError> {
        let blood_group = BloodGroup::parse(blood_group)
            .ok_or_else(|| AppError::ValidationError("Invalid blood group".to_string()))?;

        let donors = self
            .person_repo
            .find_available_donors(blood_group, city)
            .await?;

        Ok(donors.into_iter().map(PersonResponse::from).collect())
    }

    /// 헌혈자 가용 여부 변경
    pub async fn update_availability(
        &self,
        id: &str,
        is_available: bool,
    ) -> Result<PersonResponse, AppError> {
        // 헌혈자 존재 확인 (비헌혈자 계정은 404)
        self.get_donor(id).await?;

        let updated = self
            .person_repo
            .update_fields(id, doc! { "isAvailable": is_available })
            .await?
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        Ok(PersonResponse::from(updated))
    }

    /// 헌혈자 프로필 수정 (관리자 전용 경로)
    ///
    /// 이메일, 비밀번호, 역할은 변경할 수 없습니다.
    pub async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<PersonResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "At least one field must be provided".to_string(),
            ));
        }

        self.get_donor(id).await?;

        let mut update_doc = doc! {};

        if let Some(name) = request.name {
            update_doc.insert("name", name.trim());
        }
        if let Some(phone) = request.phone {
            update_doc.insert("phone", phone.trim());
        }
        if let Some(city) = request.city {
            update_doc.insert("city", city.trim());
        }
        if let Some(age) = request.age {
            update_doc.insert("age", age);
        }
        if let Some(blood_group) = request.blood_group.as_deref() {
            let parsed = BloodGroup::parse(blood_group)
                .ok_or_else(|| AppError::ValidationError("Invalid blood group".to_string()))?;
            update_doc.insert("bloodGroup", parsed.as_str());
        }
        if let Some(is_available) = request.is_available {
            update_doc.insert("isAvailable", is_available);
        }

        let updated = self
            .person_repo
            .update_fields(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        Ok(PersonResponse::from(updated))
    }

    /// 헌혈자 삭제 (관리자 전용 경로)
    ///
    /// 삭제된 헌혈자 정보를 반환합니다.
    pub async fn delete_donor(&self, id: &str) -> Result<PersonResponse, AppError> {
        self.get_donor(id).await?;

        let deleted = self
            .person_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        log::info!("헌혈자 삭제됨: {}", deleted.email);

        Ok(PersonResponse::from(deleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트에서는 최소 cost로 해싱 시간을 줄입니다
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hash_accepts_registered_password_only() {
        let hashed = hash("secret1", TEST_COST).unwrap();

        assert_ne!(hashed, "secret1");
        assert!(verify("secret1", &hashed).unwrap());
        assert!(!verify("wrong-password", &hashed).unwrap());
        assert!(!verify("Secret1", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently_per_salt() {
        let first = hash("secret1", TEST_COST).unwrap();
        let second = hash("secret1", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify("secret1", &first).unwrap());
        assert!(verify("secret1", &second).unwrap());
    }
}
