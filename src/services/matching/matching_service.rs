//! # 매칭 서비스 구현
//!
//! 혈액 요청과 헌혈자를 연결하는 양방향 매칭 로직입니다.
//!
//! - 요청 → 헌혈자: 새 혈액 요청에 대해 조건에 맞는 가용 헌혈자 계산
//! - 헌혈자 → 요청: 헌혈자가 자신과 매칭되는 대기 중 요청(알림) 조회
//!
//! 매칭 조건은 혈액형 정확 일치와 도시 대소문자 무시 일치입니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::{
        dto::persons::response::PersonResponse,
        entities::persons::{BloodGroup, Person, PersonRole},
        entities::requests::BloodRequest,
    },
    repositories::{
        persons::person_repo::PersonRepository,
        requests::request_repo::RequestRepository,
    },
};
use crate::errors::errors::AppError;

/// 헌혈자 알림 조회 결과
///
/// 가용하지 않은 헌혈자에게는 매칭 목록 대신 안내 플래그를 전달합니다.
#[derive(Debug)]
pub struct DonorNotifications {
    /// 헌혈자 가용 여부
    pub available: bool,
    /// 매칭되는 대기 중 요청 (가용하지 않으면 빈 목록)
    pub notifications: Vec<BloodRequest>,
}

impl DonorNotifications {
    /// 가용하지 않은 헌혈자 응답 (매칭 계산 없이 빈 목록)
    pub fn unavailable() -> Self {
        Self {
            available: false,
            notifications: vec![],
        }
    }

    /// 가용 헌혈자 응답
    pub fn available(notifications: Vec<BloodRequest>) -> Self {
        Self {
            available: true,
            notifications,
        }
    }
}

/// 알림 조회 전 헌혈자 상태 판정 결과
#[derive(Debug, PartialEq)]
enum DonorScreening {
    /// 가용하지 않음 (매칭 계산 생략)
    Unavailable,
    /// 가용하지만 혈액형 미등록 (매칭 대상 없음)
    NoBloodGroup,
    /// 매칭 쿼리 수행 대상
    Matchable(BloodGroup),
}

/// 혈액 요청/헌혈자 매칭 서비스
#[service(name = "matching")]
pub struct MatchingService {
    /// 사용자 리포지토리
    person_repo: Arc<PersonRepository>,

    /// 혈액 요청 리포지토리
    request_repo: Arc<RequestRepository>,
}

impl MatchingService {
    /// 혈액 요청과 매칭되는 가용 헌혈자 조회
    ///
    /// 요청 등록 직후 즉시 호출되어 응답에 포함됩니다.
    pub async fn find_matching_donors(
        &self,
        blood_group: BloodGroup,
        city: &str,
    ) -> Result<Vec<PersonResponse>, AppError> {
        let donors = self
            .person_repo
            .find_matching_donors(blood_group, city)
            .await?;

        Ok(donors.into_iter().map(PersonResponse::from).collect())
    }

    /// 헌혈자의 알림(매칭되는 대기 중 요청) 조회
    ///
    /// - 사용자가 없으면 404
    /// - 헌혈자가 아니면 403
    /// - 가용하지 않으면 매칭을 계산하지 않고 빈 목록 반환
    pub async fn notifications_for_donor(
        &self,
        donor_id: &str,
    ) -> Result<DonorNotifications, AppError> {
        let person = self
            .person_repo
            .find_by_id(donor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let blood_group = match Self::screen_donor(&person)? {
            DonorScreening::Unavailable => return Ok(DonorNotifications::unavailable()),
            DonorScreening::NoBloodGroup => return Ok(DonorNotifications::available(vec![])),
            DonorScreening::Matchable(group) => group,
        };

        let notifications = self
            .request_repo
            .find_pending_matching(blood_group, &person.city)
            .await?;

        Ok(DonorNotifications::available(notifications))
    }

    /// 헌혈자 엔티티 확인 없이 원시 매칭 수행 (내부 재사용)
    pub async fn matching_donors_for(&self, request: &BloodRequest) -> Result<Vec<PersonResponse>, AppError> {
        self.find_matching_donors(request.blood_group_needed, &request.city)
            .await
    }

    /// 알림 조회 가능 여부 판정
    ///
    /// 헌혈자가 아니면 403, 가용하지 않으면 매칭 계산을 생략합니다.
    fn screen_donor(person: &Person) -> Result<DonorScreening, AppError> {
        if person.role != PersonRole::Donor {
            return Err(AppError::AuthorizationError(
                "Only donors can view notifications".to_string(),
            ));
        }

        if !person.is_available {
            return Ok(DonorScreening::Unavailable);
        }

        match person.blood_group {
            Some(group) => Ok(DonorScreening::Matchable(group)),
            None => Ok(DonorScreening::NoBloodGroup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn donor(city: &str, blood_group: BloodGroup, available: bool) -> Person {
        Person::new(
            "Raj".to_string(),
            "raj@example.com".to_string(),
            "$2b$04$hash".to_string(),
            PersonRole::Donor,
            "0101234567".to_string(),
            city.to_string(),
            Some(blood_group),
            Some(30),
            Some(available),
        )
    }

    fn request(city: &str, blood_group: BloodGroup) -> BloodRequest {
        BloodRequest::new(
            ObjectId::new(),
            "Anita".to_string(),
            "anita@example.com".to_string(),
            "0209876543".to_string(),
            blood_group,
            city.to_string(),
        )
    }

    // 매칭 규칙의 실행 가능한 명세. 실제 조회는 리포지토리의
    // bloodGroup 일치 + 앵커된 "i" 옵션 도시 정규식 필터로 수행되며,
    // 대소문자 무시는 양쪽 모두 ASCII 범위 기준입니다.
    fn donor_matches(person: &Person, request: &BloodRequest) -> bool {
        person.is_donor()
            && person.is_available
            && person.blood_group == Some(request.blood_group_needed)
            && person.city.eq_ignore_ascii_case(request.city.trim())
    }

    #[test]
    fn test_matching_requires_same_blood_group_and_city() {
        let req = request("Pune", BloodGroup::BPositive);

        assert!(donor_matches(&donor("Pune", BloodGroup::BPositive, true), &req));
        assert!(!donor_matches(&donor("Pune", BloodGroup::OPositive, true), &req));
        assert!(!donor_matches(&donor("Delhi", BloodGroup::BPositive, true), &req));
    }

    #[test]
    fn test_city_comparison_ignores_case() {
        let req = request("pune", BloodGroup::BPositive);
        assert!(donor_matches(&donor("PUNE", BloodGroup::BPositive, true), &req));
    }

    #[test]
    fn test_unavailable_donor_never_matches() {
        let req = request("Pune", BloodGroup::BPositive);
        assert!(!donor_matches(&donor("Pune", BloodGroup::BPositive, false), &req));
    }

    #[test]
    fn test_unavailable_notice_has_distinct_shape() {
        let notice = DonorNotifications::unavailable();
        assert!(!notice.available);
        assert!(notice.notifications.is_empty());

        let open = DonorNotifications::available(vec![]);
        assert!(open.available);
        assert!(open.notifications.is_empty());
    }

    #[test]
    fn test_screening_skips_matching_for_unavailable_donor() {
        let screened =
            MatchingService::screen_donor(&donor("Pune", BloodGroup::BPositive, false)).unwrap();
        assert_eq!(screened, DonorScreening::Unavailable);
    }

    #[test]
    fn test_screening_returns_blood_group_for_available_donor() {
        let screened =
            MatchingService::screen_donor(&donor("Pune", BloodGroup::BPositive, true)).unwrap();
        assert_eq!(screened, DonorScreening::Matchable(BloodGroup::BPositive));
    }

    #[test]
    fn test_screening_rejects_non_donor() {
        let mut person = donor("Pune", BloodGroup::BPositive, true);
        person.role = PersonRole::Receiver;

        let result = MatchingService::screen_donor(&person);
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_screening_handles_missing_blood_group() {
        let mut person = donor("Pune", BloodGroup::BPositive, true);
        person.blood_group = None;

        let screened = MatchingService::screen_donor(&person).unwrap();
        assert_eq!(screened, DonorScreening::NoBloodGroup);
    }
}
