//! 사용자 요청 DTO
//!
//! 회원가입, 로그인, 헌혈자 정보 수정을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 혈액형과 역할은 문자열로 받아 검증한 뒤 서비스 계층에서 열거형으로 변환합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::persons::{BloodGroup, PersonRole};

/// 회원가입 요청 DTO
///
/// 역할이 donor인 경우 혈액형과 나이가 필수입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_donor_fields"))]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// 사용자 역할 (donor, receiver, admin)
    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    /// 혈액형 (헌혈자 필수)
    #[validate(custom(function = "validate_optional_blood_group"))]
    pub blood_group: Option<String>,

    /// 나이 (헌혈자 필수, 18-65)
    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: Option<i32>,

    /// 헌혈 가용 여부 (생략 시 true)
    pub is_available: Option<bool>,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 헌혈자 가용 여부 변경 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub is_available: bool,
}

/// 헌혈자 프로필 수정 요청 DTO (관리자 전용)
///
/// 이메일, 비밀번호, 역할은 이 경로로 변경할 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "City cannot be empty"))]
    pub city: Option<String>,

    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: Option<i32>,

    #[validate(custom(function = "validate_optional_blood_group"))]
    pub blood_group: Option<String>,

    pub is_available: Option<bool>,
}

impl UpdateProfileRequest {
    /// 수정할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.city.is_none()
            && self.age.is_none()
            && self.blood_group.is_none()
            && self.is_available.is_none()
    }
}

/// 헌혈자 검색 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorSearchQuery {
    pub blood_group: Option<String>,
    pub city: Option<String>,
}

/// 역할 문자열 검증 (donor, receiver, admin)
fn validate_role(role: &str) -> Result<(), ValidationError> {
    if PersonRole::parse(role).is_none() {
        return Err(ValidationError::new("invalid_role")
            .with_message("Role must be one of donor, receiver, admin".into()));
    }
    Ok(())
}

/// 혈액형 문자열 검증 (8종 외의 값 거부)
fn validate_optional_blood_group(blood_group: &str) -> Result<(), ValidationError> {
    if BloodGroup::parse(blood_group).is_none() {
        return Err(ValidationError::new("invalid_blood_group")
            .with_message("Invalid blood group".into()));
    }
    Ok(())
}

/// 헌혈자 필수 필드 검증 (혈액형, 나이)
fn validate_donor_fields(req: &RegisterRequest) -> Result<(), ValidationError> {
    if PersonRole::parse(&req.role) == Some(PersonRole::Donor) {
        if req.blood_group.is_none() {
            return Err(ValidationError::new("missing_blood_group")
                .with_message("Blood group is required for donors".into()));
        }
        if req.age.is_none() {
            return Err(ValidationError::new("missing_age")
                .with_message("Age is required for donors".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor_request() -> RegisterRequest {
        RegisterRequest {
            name: "Raj".to_string(),
            email: "raj@example.com".to_string(),
            password: "secret1".to_string(),
            role: "donor".to_string(),
            phone: "0101234567".to_string(),
            city: "Pune".to_string(),
            blood_group: Some("B+".to_string()),
            age: Some(30),
            is_available: None,
        }
    }

    #[test]
    fn test_valid_donor_registration_passes() {
        assert!(donor_request().validate().is_ok());
    }

    #[test]
    fn test_donor_without_blood_group_fails() {
        let mut req = donor_request();
        req.blood_group = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_donor_without_age_fails() {
        let mut req = donor_request();
        req.age = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_receiver_without_donor_fields_passes() {
        let mut req = donor_request();
        req.role = "receiver".to_string();
        req.blood_group = None;
        req.age = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_role_fails() {
        let mut req = donor_request();
        req.role = "guest".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_blood_group_fails() {
        let mut req = donor_request();
        req.blood_group = Some("C+".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_age_out_of_range_fails() {
        let mut req = donor_request();
        req.age = Some(17);
        assert!(req.validate().is_err());

        req.age = Some(66);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_profile_empty_detection() {
        let empty = UpdateProfileRequest {
            name: None,
            phone: None,
            city: None,
            age: None,
            blood_group: None,
            is_available: None,
        };
        assert!(empty.is_empty());

        let partial = UpdateProfileRequest {
            city: Some("Delhi".to_string()),
            ..empty
        };
        assert!(!partial.is_empty());
        assert!(partial.validate().is_ok());
    }
}
