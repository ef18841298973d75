//! 혈액 요청 DTO
//!
//! 혈액 요청 등록과 상태 변경을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::persons::BloodGroup;
use crate::domain::entities::requests::RequestStatus;

/// 혈액 요청 등록 DTO
///
/// 여섯 필드가 모두 필수입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequest {
    #[validate(length(min = 1, message = "Receiver id is required"))]
    pub receiver_id: String,

    #[validate(length(min = 1, message = "Receiver name is required"))]
    pub receiver_name: String,

    #[validate(email(message = "Valid receiver email is required"))]
    pub receiver_email: String,

    #[validate(length(min = 1, message = "Receiver phone is required"))]
    pub receiver_phone: String,

    #[validate(custom(function = "validate_blood_group_needed"))]
    pub blood_group_needed: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
}

/// 요청 상태 변경 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// 혈액형 문자열 검증
fn validate_blood_group_needed(blood_group: &str) -> Result<(), ValidationError> {
    if BloodGroup::parse(blood_group).is_none() {
        return Err(ValidationError::new("invalid_blood_group")
            .with_message("Invalid blood group".into()));
    }
    Ok(())
}

/// 상태 문자열 검증 (pending, fulfilled, cancelled)
fn validate_status(status: &str) -> Result<(), ValidationError> {
    if RequestStatus::parse(status).is_none() {
        return Err(ValidationError::new("invalid_status")
            .with_message("Status must be one of pending, fulfilled, cancelled".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBloodRequest {
        CreateBloodRequest {
            receiver_id: "665f1c2e8b3e4a5d6c7f8a9b".to_string(),
            receiver_name: "Anita".to_string(),
            receiver_email: "anita@example.com".to_string(),
            receiver_phone: "0209876543".to_string(),
            blood_group_needed: "O-".to_string(),
            city: "Mumbai".to_string(),
        }
    }

    #[test]
    fn test_valid_blood_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fail() {
        let mut req = valid_request();
        req.receiver_name = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.city = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_blood_group_fails() {
        let mut req = valid_request();
        req.blood_group_needed = "Z+".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_validation() {
        let ok = UpdateStatusRequest {
            status: "fulfilled".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = UpdateStatusRequest {
            status: "done".to_string(),
        };
        assert!(bad.validate().is_err());
    }
}
